use approx::assert_abs_diff_eq;

use cytosim::error::DatasetError;
use cytosim::stats::Histogram;

#[test]
fn counts_every_value_once() {
    let values: Vec<f64> = (0..100).map(|i| i as f64 * 0.37).collect();
    let hist = Histogram::from_values(&values, 10).unwrap();
    assert_eq!(hist.bins(), 10);
    assert_eq!(hist.edges.len(), 11);
    assert_eq!(hist.total(), values.len());
}

#[test]
fn maximum_lands_in_last_bin() {
    let hist = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
    assert_eq!(hist.counts, vec![1, 1, 1, 2]);
    assert_abs_diff_eq!(hist.edges[0], 0.0);
    assert_abs_diff_eq!(hist.edges[4], 4.0);
}

#[test]
fn constant_sample_is_centred() {
    let hist = Histogram::from_values(&[2.0, 2.0, 2.0], 10).unwrap();
    let (lo, hi) = hist.range();
    assert_abs_diff_eq!(lo, 1.5);
    assert_abs_diff_eq!(hi, 2.5);
    assert_eq!(hist.total(), 3);
    assert_eq!(hist.counts.iter().filter(|&&c| c > 0).count(), 1);
}

#[test]
fn non_finite_values_are_skipped() {
    let hist = Histogram::from_values(&[1.0, f64::NAN, 2.0, f64::INFINITY], 2).unwrap();
    assert_eq!(hist.total(), 2);
}

#[test]
fn empty_sample_has_zero_counts() {
    let hist = Histogram::from_values(&[], 3).unwrap();
    assert_eq!(hist.counts, vec![0, 0, 0]);
    assert_eq!(hist.max_count(), 0);
}

#[test]
fn zero_bins_is_invalid() {
    assert!(matches!(
        Histogram::from_values(&[1.0], 0),
        Err(DatasetError::InvalidParameter(_))
    ));
}

#[test]
fn iter_bins_pairs_edges_with_counts() {
    let hist = Histogram::from_values(&[0.0, 0.5, 1.0], 2).unwrap();
    let bins: Vec<(f64, f64, usize)> = hist.iter_bins().collect();
    assert_eq!(bins.len(), 2);
    assert_abs_diff_eq!(bins[0].1, 0.5);
    assert_eq!(bins[0].2, 1);
    assert_eq!(bins[1].2, 2);
}

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};
use rstest::*;

use cytosim::error::DatasetError;
use cytosim::stats::summary::quantile_sorted;
use cytosim::stats::{ColumnSummary, Statistic, SummaryStatistics};

#[test]
fn column_summary_matches_hand_computation() {
    let values = array![1.0, 2.0, 3.0, 4.0];
    let s = ColumnSummary::from_values(values.view());
    assert_eq!(s.count, 4);
    assert_abs_diff_eq!(s.mean, 2.5, epsilon = 1e-12);
    // sqrt(((1.5^2 + 0.5^2) * 2) / 3)
    assert_abs_diff_eq!(s.std, (5.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(s.min, 1.0);
    assert_abs_diff_eq!(s.q25, 1.75, epsilon = 1e-12);
    assert_abs_diff_eq!(s.median, 2.5, epsilon = 1e-12);
    assert_abs_diff_eq!(s.q75, 3.25, epsilon = 1e-12);
    assert_abs_diff_eq!(s.max, 4.0);
}

#[test]
fn unsorted_input_gives_same_quartiles() {
    let sorted = ColumnSummary::from_values(array![1.0, 2.0, 3.0, 4.0, 10.0].view());
    let shuffled = ColumnSummary::from_values(array![10.0, 3.0, 1.0, 4.0, 2.0].view());
    assert_eq!(sorted.count, shuffled.count);
    assert_abs_diff_eq!(sorted.mean, shuffled.mean, epsilon = 1e-12);
    assert_abs_diff_eq!(sorted.std, shuffled.std, epsilon = 1e-12);
    assert_eq!(
        (sorted.min, sorted.q25, sorted.median, sorted.q75, sorted.max),
        (shuffled.min, shuffled.q25, shuffled.median, shuffled.q75, shuffled.max)
    );
}

#[test]
fn single_value_has_undefined_std() {
    let s = ColumnSummary::from_values(array![5.0].view());
    assert_eq!(s.count, 1);
    assert!(s.std.is_nan());
    assert_abs_diff_eq!(s.q25, 5.0);
    assert_abs_diff_eq!(s.q75, 5.0);
}

#[test]
fn empty_column_is_all_nan() {
    let s = ColumnSummary::from_values(Array1::<f64>::zeros(0).view());
    assert_eq!(s.count, 0);
    assert!(s.mean.is_nan() && s.min.is_nan() && s.max.is_nan());
}

#[rstest]
#[case(0.0, 1.0)]
#[case(1.0, 5.0)]
#[case(0.5, 3.0)]
#[case(0.1, 1.4)]
fn quantile_interpolates_linearly(#[case] p: f64, #[case] expected: f64) {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_abs_diff_eq!(quantile_sorted(&sorted, p), expected, epsilon = 1e-12);
}

#[test]
fn quantile_out_of_range_is_nan() {
    assert!(quantile_sorted(&[1.0, 2.0], 1.5).is_nan());
    assert!(quantile_sorted(&[], 0.5).is_nan());
}

fn three_column_summary() -> SummaryStatistics {
    let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    let data = array![[1.0, 10.0, 5.0], [2.0, 20.0, 5.0], [3.0, 30.0, 5.0]];
    SummaryStatistics::compute(&names, data.view())
}

#[test]
fn select_returns_requested_columns_in_order() {
    let full = three_column_summary();
    let subset = full.select(&["C", "A"]).unwrap();
    assert_eq!(subset.columns(), &["C".to_string(), "A".to_string()]);
    assert_eq!(subset.get("A").unwrap(), full.get("A").unwrap());
    assert_eq!(subset.get("C").unwrap(), full.get("C").unwrap());
    assert!(subset.get("B").is_err());
}

#[test]
fn select_unknown_column_fails() {
    let full = three_column_summary();
    assert!(matches!(full.select(&["A", "nope"]), Err(DatasetError::UnknownColumn(c)) if c == "nope"));
}

#[test]
fn row_extracts_one_statistic() {
    let full = three_column_summary();
    let means = full.row(Statistic::Mean);
    assert_eq!(means.len(), 3);
    assert_eq!(means[1].0, "B");
    assert_abs_diff_eq!(means[1].1, 20.0, epsilon = 1e-12);

    let stds = full.row(Statistic::Std);
    assert_abs_diff_eq!(stds[0].1, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(stds[2].1, 0.0, epsilon = 1e-12);
}

#[test]
fn display_has_one_line_per_statistic() {
    let text = three_column_summary().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1 + Statistic::ALL.len());
    for (line, stat) in lines[1..].iter().zip(Statistic::ALL) {
        assert!(line.starts_with(stat.label()));
    }
}

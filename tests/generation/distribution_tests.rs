use approx::assert_abs_diff_eq;
use rand::Rng;
use rstest::*;

use cytosim::error::DatasetError;
use cytosim::generation::{create_rng, round_to, Distribution, DistributionParams};

#[rstest]
#[case("poisson", Distribution::Poisson)]
#[case("normal", Distribution::Normal)]
#[case("Normal", Distribution::Normal)]
#[case(" POISSON ", Distribution::Poisson)]
#[case("negative_binomial", Distribution::NegativeBinomial { prob: 0.25 })]
#[case("negative-binomial", Distribution::NegativeBinomial { prob: 0.25 })]
fn names_resolve_to_families(#[case] name: &str, #[case] expected: Distribution) {
    let params = DistributionParams { prob: Some(0.25) };
    assert_eq!(Distribution::from_name(name, params).unwrap(), expected);
}

#[rstest]
#[case("gamma")]
#[case("binomial")]
#[case("")]
fn unknown_names_are_unsupported(#[case] name: &str) {
    let result = Distribution::from_name(name, DistributionParams::default());
    assert!(matches!(result, Err(DatasetError::UnsupportedDistribution(_))));
}

#[test]
fn negative_binomial_requires_prob() {
    let result = Distribution::from_name("negative_binomial", DistributionParams::default());
    assert!(matches!(result, Err(DatasetError::InvalidParameter(_))));
}

#[rstest]
#[case(0.0)]
#[case(-0.1)]
#[case(1.0001)]
#[case(f64::NAN)]
fn prob_outside_unit_interval_is_invalid(#[case] prob: f64) {
    assert!(matches!(
        Distribution::negative_binomial(prob),
        Err(DatasetError::InvalidParameter(_))
    ));
    let params = DistributionParams { prob: Some(prob) };
    assert!(matches!(
        Distribution::from_name("negative_binomial", params),
        Err(DatasetError::InvalidParameter(_))
    ));
}

#[test]
fn prob_of_one_is_accepted() {
    assert_eq!(
        Distribution::negative_binomial(1.0).unwrap(),
        Distribution::NegativeBinomial { prob: 1.0 }
    );
}

#[test]
fn names_round_trip_through_from_name() {
    let params = DistributionParams { prob: Some(0.5) };
    for name in Distribution::NAMES {
        assert_eq!(Distribution::from_name(name, params).unwrap().name(), name);
    }
    assert_eq!(
        Distribution::NegativeBinomial { prob: 0.5 }.to_string(),
        "negative_binomial(prob=0.5)"
    );
}

#[rstest]
#[case(1.234, 1.23)]
#[case(1.235_000_1, 1.24)]
#[case(-2.718, -2.72)]
#[case(3.0, 3.0)]
fn round_to_two_decimals(#[case] value: f64, #[case] expected: f64) {
    assert_abs_diff_eq!(round_to(value, 2), expected, epsilon = 1e-12);
}

#[test]
fn seeded_rng_is_reproducible() {
    let mut a = create_rng(Some(7));
    let mut b = create_rng(Some(7));
    let xs: Vec<u64> = (0..5).map(|_| a.gen_range(0..1_000_000)).collect();
    let ys: Vec<u64> = (0..5).map(|_| b.gen_range(0..1_000_000)).collect();
    assert_eq!(xs, ys);
}

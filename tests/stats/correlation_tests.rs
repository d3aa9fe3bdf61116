use approx::assert_abs_diff_eq;
use ndarray::array;

use cytosim::stats::CorrelationMatrix;
use cytosim::stats::correlation::pearson;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("c{i}")).collect()
}

#[test]
fn perfect_positive_and_negative_correlation() {
    let x = array![1.0, 2.0, 3.0, 4.0];
    let y = array![2.0, 4.0, 6.0, 8.0];
    let z = array![4.0, 3.0, 2.0, 1.0];
    assert_abs_diff_eq!(pearson(x.view(), y.view()), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(pearson(x.view(), z.view()), -1.0, epsilon = 1e-12);
}

#[test]
fn constant_or_short_input_is_nan() {
    let x = array![1.0, 2.0, 3.0];
    let c = array![5.0, 5.0, 5.0];
    assert!(pearson(x.view(), c.view()).is_nan());
    assert!(pearson(array![1.0].view(), array![2.0].view()).is_nan());
}

#[test]
fn matrix_is_symmetric_with_unit_diagonal() {
    let data = array![[1.0, 10.0, 3.0], [2.0, 14.0, 1.0], [3.0, 12.0, 2.0], [4.0, 11.0, 5.0]];
    let m = CorrelationMatrix::pearson(&names(3), data.view());
    assert_eq!(m.len(), 3);
    for i in 0..3 {
        assert_abs_diff_eq!(m.get(i, i), 1.0, epsilon = 1e-12);
        for j in 0..3 {
            assert_abs_diff_eq!(m.get(i, j), m.get(j, i), epsilon = 1e-12);
        }
    }
}

#[test]
fn mask_hides_upper_triangle_and_diagonal() {
    let data = array![[1.0, 10.0], [2.0, 14.0], [3.0, 12.0]];
    let m = CorrelationMatrix::pearson(&names(2), data.view());
    let masked = m.masked();
    assert!(masked[[0, 0]].is_none());
    assert!(masked[[0, 1]].is_none());
    assert!(masked[[1, 1]].is_none());
    assert_abs_diff_eq!(masked[[1, 0]].unwrap(), 0.5, epsilon = 1e-12);
}

#[test]
fn display_lists_every_column() {
    let data = array![[1.0, 10.0], [2.0, 14.0], [3.0, 12.0]];
    let text = CorrelationMatrix::pearson(&names(2), data.view()).to_string();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("0.500"));
}

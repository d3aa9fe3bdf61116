//! Tests for the chart helpers that do not touch a drawing backend.
use approx::assert_abs_diff_eq;
use ndarray::Array2;
use plotters::style::RGBColor;

use cytosim::error::DatasetError;
use cytosim::plot::{cell_origin, heat_color, render_correlation_heatmap, shared_range};
use cytosim::stats::{CorrelationMatrix, Histogram};

#[test]
fn shared_range_covers_both_histograms() {
    let a = Histogram::from_values(&[0.0, 5.0], 5).unwrap();
    let b = Histogram::from_values(&[2.0, 9.0], 5).unwrap();
    let (lo, hi) = shared_range(&a, &b);
    assert_abs_diff_eq!(lo, 0.0);
    assert_abs_diff_eq!(hi, 9.0);
}

#[test]
fn heat_color_ramp_endpoints_and_clamping() {
    let low = heat_color(-1.0, -1.0, 1.0);
    let high = heat_color(1.0, -1.0, 1.0);
    assert_ne!(low, high);
    assert_eq!(heat_color(-5.0, -1.0, 1.0), low);
    assert_eq!(heat_color(5.0, -1.0, 1.0), high);
    assert_eq!(heat_color(0.3, 0.3, 0.3), high);
    let RGBColor(r_mid, _, _) = heat_color(0.0, -1.0, 1.0);
    assert!(r_mid > low.0 && r_mid < high.0);
}

#[test]
fn empty_heatmap_is_refused() {
    let empty = CorrelationMatrix {
        columns: vec![],
        values: Array2::zeros((0, 0)),
    };
    let path = std::env::temp_dir().join("cytosim_empty_heatmap.png");
    assert!(matches!(
        render_correlation_heatmap(&path, &empty),
        Err(DatasetError::InvalidParameter(_))
    ));
}

#[test]
fn heatmap_cells_fill_the_grid_top_down() {
    let side = 3;
    assert_eq!(cell_origin(0, 0, side), (0, 2));
    assert_eq!(cell_origin(2, 0, side), (0, 0));
    assert_eq!(cell_origin(2, 1, side), (1, 0));
    for row in 0..3 {
        for col in 0..3 {
            let (x, y) = cell_origin(row, col, side);
            assert!((0..side).contains(&x) && (0..side).contains(&y));
        }
    }
}

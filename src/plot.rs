// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PNG rendering of histograms and correlation heatmaps.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::error::{DatasetError, Result};
use crate::stats::{CorrelationMatrix, Histogram};

const PANEL_SIZE: (u32, u32) = (500, 500);

const OBSERVED_COLOR: RGBColor = RGBColor(31, 119, 180);
const GENERATED_COLOR: RGBColor = RGBColor(255, 127, 14);

// Endpoints of the heatmap colour ramp (low, high).
const RAMP_LOW: RGBColor = RGBColor(3, 5, 26);
const RAMP_HIGH: RGBColor = RGBColor(250, 235, 221);

fn render_err<E: std::fmt::Display>(err: E) -> DatasetError {
    DatasetError::render(err.to_string())
}

/// Union of the ranges of two histograms, for a shared x axis.
pub fn shared_range(a: &Histogram, b: &Histogram) -> (f64, f64) {
    let (a_lo, a_hi) = a.range();
    let (b_lo, b_hi) = b.range();
    (a_lo.min(b_lo), a_hi.max(b_hi))
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    hist: &Histogram,
    x_range: (f64, f64),
    color: RGBColor,
) -> Result<()> {
    let y_max = hist.max_count().max(1) as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range.0..x_range.1, 0u32..(y_max + y_max / 10 + 1))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("MFI")
        .y_desc("Count")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(hist.iter_bins().map(|(left, right, count)| {
            Rectangle::new([(left, 0u32), (right, count as u32)], color.filled())
        }))
        .map_err(render_err)?;
    Ok(())
}

/// Observed and generated histograms side by side on a shared x range.
pub fn render_histogram_comparison(
    path: &Path,
    column: &str,
    observed: &Histogram,
    generated: &Histogram,
) -> Result<()> {
    let root = BitMapBackend::new(path, (PANEL_SIZE.0 * 2, PANEL_SIZE.1)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let root = root
        .titled(column, ("sans-serif", 24).into_font())
        .map_err(render_err)?;
    let (left, right) = root.split_horizontally(PANEL_SIZE.0 as i32);
    let range = shared_range(observed, generated);

    draw_panel(&left, "Observed data", observed, range, OBSERVED_COLOR)?;
    draw_panel(&right, "Generated data", generated, range, GENERATED_COLOR)?;

    root.present().map_err(render_err)?;
    debug!(path = %path.display(), "wrote histogram comparison");
    Ok(())
}

/// A single generated histogram.
pub fn render_histogram(path: &Path, column: &str, hist: &Histogram) -> Result<()> {
    let root = BitMapBackend::new(path, (PANEL_SIZE.0 * 2, PANEL_SIZE.1)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let title = format!("{column}: Randomly generated distribution");
    draw_panel(&root, &title, hist, hist.range(), GENERATED_COLOR)?;
    root.present().map_err(render_err)?;
    debug!(path = %path.display(), "wrote histogram");
    Ok(())
}

/// Colour for `value` on a linear ramp over `[vmin, vmax]`.
pub fn heat_color(value: f64, vmin: f64, vmax: f64) -> RGBColor {
    let t = if vmax > vmin {
        ((value - vmin) / (vmax - vmin)).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        lerp(RAMP_LOW.0, RAMP_HIGH.0),
        lerp(RAMP_LOW.1, RAMP_HIGH.1),
        lerp(RAMP_LOW.2, RAMP_HIGH.2),
    )
}

/// Lower-left corner of matrix entry `(row, col)` on the heatmap grid.
///
/// Row 0 is drawn at the top, so rows count down from `side - 1`.
pub fn cell_origin(row: usize, col: usize, side: i32) -> (i32, i32) {
    (col as i32, side - 1 - row as i32)
}

/// Lower-triangle correlation heatmap, colour-capped at 1.
pub fn render_correlation_heatmap(path: &Path, matrix: &CorrelationMatrix) -> Result<()> {
    let k = matrix.len();
    if k == 0 {
        return Err(DatasetError::invalid_parameter("empty correlation matrix"));
    }
    let masked = matrix.masked();
    let vmin = masked
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::INFINITY, f64::min);
    let vmin = if vmin.is_finite() { vmin.min(1.0) } else { -1.0 };

    let root = BitMapBackend::new(path, (PANEL_SIZE.0 + 100, PANEL_SIZE.1 + 100)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let side = k as i32;
    // Segmented axes put each label at the centre of its cell. Integer
    // ranges include their end, so `0..side - 1` spans exactly `k` cells.
    let label = |pos: &SegmentValue<i32>| match pos {
        SegmentValue::CenterOf(i) => matrix.columns.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    let row_label = |pos: &SegmentValue<i32>| match pos {
        SegmentValue::CenterOf(i) => matrix
            .columns
            .get((side - 1 - *i) as usize)
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation Heatmap", ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..side - 1).into_segmented(), (0..side - 1).into_segmented())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(k)
        .y_labels(k)
        .x_label_formatter(&label)
        .y_label_formatter(&row_label)
        .draw()
        .map_err(render_err)?;

    let cells = masked.indexed_iter().filter_map(|((i, j), cell)| {
        cell.filter(|v| v.is_finite()).map(|v| {
            let (x, y) = cell_origin(i, j, side);
            Rectangle::new(
                [
                    (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                heat_color(v, vmin, 1.0).filled(),
            )
        })
    });
    chart.draw_series(cells).map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!(path = %path.display(), columns = k, "wrote correlation heatmap");
    Ok(())
}

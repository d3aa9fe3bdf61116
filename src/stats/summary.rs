// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayView1, ArrayView2, Axis};

use crate::error::{DatasetError, Result};

/// Rows of a describe-style summary, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Count,
    Mean,
    Std,
    Min,
    Q25,
    Median,
    Q75,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 8] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Q25,
        Statistic::Median,
        Statistic::Q75,
        Statistic::Max,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Q25 => "25%",
            Statistic::Median => "50%",
            Statistic::Q75 => "75%",
            Statistic::Max => "max",
        }
    }
}

/// Descriptive statistics of a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); NaN below two values.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    pub fn from_values(values: ArrayView1<'_, f64>) -> Self {
        let n = values.len();
        let mut sorted: Vec<f64> = values.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);

        let mean = values.mean().unwrap_or(f64::NAN);
        let std = if n < 2 { f64::NAN } else { values.std(1.0) };

        Self {
            count: n,
            mean,
            std,
            min: sorted.first().copied().unwrap_or(f64::NAN),
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted.last().copied().unwrap_or(f64::NAN),
        }
    }

    pub fn value(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Count => self.count as f64,
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Min => self.min,
            Statistic::Q25 => self.q25,
            Statistic::Median => self.median,
            Statistic::Q75 => self.q75,
            Statistic::Max => self.max,
        }
    }
}

/// Quantile of already sorted data by linear interpolation between closest ranks.
///
/// Returns NaN for empty input or `p` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Per-column summary of a table, kept in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    columns: Vec<String>,
    summaries: Vec<ColumnSummary>,
}

impl SummaryStatistics {
    /// Summarise each column of `values`; `columns` names them in order.
    pub fn compute(columns: &[String], values: ArrayView2<'_, f64>) -> Self {
        debug_assert_eq!(columns.len(), values.ncols());
        let summaries = values
            .axis_iter(Axis(1))
            .map(ColumnSummary::from_values)
            .collect();
        Self {
            columns: columns.to_vec(),
            summaries,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: &str) -> Result<&ColumnSummary> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.summaries[i])
            .ok_or_else(|| DatasetError::unknown_column(column))
    }

    /// Subset restricted to `columns`, in request order.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<SummaryStatistics> {
        let mut out = SummaryStatistics {
            columns: Vec::with_capacity(columns.len()),
            summaries: Vec::with_capacity(columns.len()),
        };
        for c in columns {
            let summary = *self.get(c.as_ref())?;
            out.columns.push(c.as_ref().to_string());
            out.summaries.push(summary);
        }
        Ok(out)
    }

    /// One statistic across all columns, as ordered `(column, value)` pairs.
    pub fn row(&self, stat: Statistic) -> Vec<(String, f64)> {
        self.iter()
            .map(|(c, s)| (c.to_string(), s.value(stat)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnSummary)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.summaries.iter())
    }
}

impl std::fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<Vec<String>> = Statistic::ALL
            .iter()
            .map(|&stat| {
                self.summaries
                    .iter()
                    .map(|s| format!("{:.6}", s.value(stat)))
                    .collect()
            })
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, name)| cells.iter().map(|r| r[j].len()).fold(name.len(), usize::max))
            .collect();

        write!(f, "{:<5}", "")?;
        for (name, w) in self.columns.iter().zip(widths.iter().copied()) {
            write!(f, "  {name:>w$}")?;
        }
        writeln!(f)?;
        for (stat, row) in Statistic::ALL.iter().zip(&cells) {
            write!(f, "{:<5}", stat.label())?;
            for (cell, w) in row.iter().zip(widths.iter().copied()) {
                write!(f, "  {cell:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::Write;

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use super::Distribution;
use crate::config::GENERATED_DECIMALS;
use crate::error::{DatasetError, Result};
use crate::table::quote_field;

/// A request for synthetic records.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub columns: Vec<String>,
    pub sample_count: usize,
    pub distribution: Distribution,
}

impl GenerationRequest {
    pub fn new<S: AsRef<str>>(columns: &[S], sample_count: usize, distribution: Distribution) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            sample_count,
            distribution,
        }
    }

    /// Check everything that does not depend on the dataset.
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(DatasetError::invalid_parameter("no columns requested"));
        }
        if self.sample_count == 0 {
            return Err(DatasetError::invalid_parameter("sample count must be positive"));
        }
        if let Distribution::NegativeBinomial { prob } = self.distribution {
            super::check_prob(prob)?;
        }
        Ok(())
    }
}

/// Synthetic records, one column per requested name and a positional row index.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecordSet {
    columns: Vec<String>,
    values: Array2<f64>,
}

impl GeneratedRecordSet {
    pub(crate) fn from_columns(columns: Vec<String>, data: Vec<Vec<f64>>, rows: usize) -> Result<Self> {
        let mut values = Array2::<f64>::zeros((rows, columns.len()));
        for (j, col) in data.into_iter().enumerate() {
            if col.len() != rows {
                return Err(DatasetError::invalid_parameter(format!(
                    "column '{}' has {} values, expected {rows}",
                    columns[j],
                    col.len()
                )));
            }
            values.column_mut(j).assign(&ArrayView1::from(col.as_slice()));
        }
        Ok(Self { columns, values })
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        let pos = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DatasetError::unknown_column(name))?;
        Ok(self.values.column(pos))
    }

    /// Write the records as comma-separated text, values to two decimals.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        let header: Vec<String> = self.columns.iter().map(|c| quote_field(c)).collect();
        writeln!(writer, "{}", header.join(","))?;
        let precision = GENERATED_DECIMALS as usize;
        for row in self.values.axis_iter(Axis(0)) {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:.precision$}")).collect();
            writeln!(writer, "{}", cells.join(","))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for GeneratedRecordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let idx_width = self.values.nrows().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, name)| {
                self.values
                    .column(j)
                    .iter()
                    .map(|v| format!("{v:.2}").len())
                    .fold(name.len(), usize::max)
            })
            .collect();
        write!(f, "{:<idx_width$}", "")?;
        for (name, w) in self.columns.iter().zip(widths.iter().copied()) {
            write!(f, "  {name:>w$}")?;
        }
        writeln!(f)?;
        for (i, row) in self.values.axis_iter(Axis(0)).enumerate() {
            write!(f, "{i:<idx_width$}")?;
            for (v, w) in row.iter().zip(widths.iter().copied()) {
                write!(f, "  {v:>w$.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

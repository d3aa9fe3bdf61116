// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Labelled 2-D table of measurements plus the loader for the panel export.

pub mod loader;

use std::collections::HashSet;
use std::io::Write;

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{DatasetError, Result};

/// Numeric observations indexed by sample ID (rows) and column name.
///
/// Every cell is a finite `f64`, column names are unique and the index has one
/// entry per row. Construction through [`Table::new`] checks all of this.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    index_name: String,
    index: Vec<String>,
    columns: Vec<String>,
    values: Array2<f64>,
}

impl Table {
    pub fn new(
        index_name: impl Into<String>,
        index: Vec<String>,
        columns: Vec<String>,
        values: Array2<f64>,
    ) -> Result<Self> {
        if values.nrows() != index.len() {
            return Err(DatasetError::format(format!(
                "index has {} entries but table has {} rows",
                index.len(),
                values.nrows()
            )));
        }
        if values.ncols() != columns.len() {
            return Err(DatasetError::format(format!(
                "{} column names given for {} columns",
                columns.len(),
                values.ncols()
            )));
        }
        if let Some(dup) = first_duplicate(&columns) {
            return Err(DatasetError::format(format!("duplicate column name '{dup}'")));
        }
        if let Some(dup) = first_duplicate(&index) {
            return Err(DatasetError::format(format!("duplicate sample ID '{dup}'")));
        }
        if let Some(((r, c), v)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DatasetError::format(format!(
                "non-finite value {v} at sample '{}', column '{}'",
                index[r], columns[c]
            )));
        }
        Ok(Self {
            index_name: index_name.into(),
            index,
            columns,
            values,
        })
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn column_position(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DatasetError::unknown_column(name))
    }

    /// View of the values of one column.
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        let pos = self.column_position(name)?;
        Ok(self.values.column(pos))
    }

    /// New table restricted to `columns`, in the order requested.
    pub fn select<S: AsRef<str>>(&self, columns: &[S]) -> Result<Table> {
        let positions = columns
            .iter()
            .map(|c| self.column_position(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let values = self.values.select(Axis(1), &positions);
        let names = positions.iter().map(|&p| self.columns[p].clone()).collect();
        Table::new(self.index_name.clone(), self.index.clone(), names, values)
    }

    /// First `n` rows (all rows if the table is shorter).
    pub fn head(&self, n: usize) -> Table {
        let n = n.min(self.index.len());
        Self {
            index_name: self.index_name.clone(),
            index: self.index[..n].to_vec(),
            columns: self.columns.clone(),
            values: self.values.slice(ndarray::s![..n, ..]).to_owned(),
        }
    }

    /// Write the table as comma-separated text with the index as first column.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", quote_field(&self.index_name))?;
        for c in &self.columns {
            write!(writer, ",{}", quote_field(c))?;
        }
        writeln!(writer)?;
        for (id, row) in self.index.iter().zip(self.values.axis_iter(Axis(0))) {
            write!(writer, "{}", quote_field(id))?;
            for v in row.iter() {
                write!(writer, ",{v}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id_width = self
            .index
            .iter()
            .map(String::len)
            .chain(std::iter::once(self.index_name.len()))
            .max()
            .unwrap_or(0);
        let cells: Vec<Vec<String>> = self
            .values
            .axis_iter(Axis(0))
            .map(|row| row.iter().map(|v| format!("{v:.2}")).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, name)| {
                cells
                    .iter()
                    .map(|r| r[j].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<id_width$}", self.index_name)?;
        for (name, w) in self.columns.iter().zip(widths.iter().copied()) {
            write!(f, "  {name:>w$}")?;
        }
        writeln!(f)?;
        for (id, row) in self.index.iter().zip(&cells) {
            write!(f, "{id:<id_width$}")?;
            for (cell, w) in row.iter().zip(widths.iter().copied()) {
                write!(f, "  {cell:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub(crate) fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn first_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Some(name.as_str());
        }
    }
    None
}

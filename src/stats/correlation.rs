// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// Pearson correlation between every pair of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Array2<f64>,
}

impl CorrelationMatrix {
    /// Pairwise correlation of the columns of `data`.
    ///
    /// A column with zero variance has NaN correlation with everything,
    /// itself included.
    pub fn pearson(columns: &[String], data: ArrayView2<'_, f64>) -> Self {
        let k = data.ncols();
        let mut values = Array2::<f64>::zeros((k, k));
        for i in 0..k {
            for j in i..k {
                let r = pearson(data.column(i), data.column(j));
                values[[i, j]] = r;
                values[[j, i]] = r;
            }
        }
        Self {
            columns: columns.to_vec(),
            values,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[[row, col]]
    }

    /// Display cells with the upper triangle (diagonal included) hidden.
    pub fn masked(&self) -> Array2<Option<f64>> {
        let mut out = Array2::from_elem(self.values.raw_dim(), None);
        for ((i, j), v) in self.values.indexed_iter() {
            if j < i {
                out[[i, j]] = Some(*v);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl std::fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.columns.iter().map(String::len).fold(7, usize::max);
        write!(f, "{:<width$}", "")?;
        for c in &self.columns {
            write!(f, "  {c:>width$}")?;
        }
        writeln!(f)?;
        for (name, row) in self.columns.iter().zip(self.masked().axis_iter(Axis(0))) {
            write!(f, "{name:<width$}")?;
            for cell in row.iter() {
                match cell {
                    Some(v) => write!(f, "  {v:>width$.3}")?,
                    None => write!(f, "  {:>width$}", "")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pearson correlation coefficient of two equally long samples.
pub fn pearson(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
    let n = x.len();
    if n != y.len() || n < 2 {
        return f64::NAN;
    }
    let (Some(mx), Some(my)) = (x.mean(), y.mean()) else {
        return f64::NAN;
    };
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

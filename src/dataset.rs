// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;
use tracing::debug;

use crate::config::{DatasetConfig, GENERATED_DECIMALS};
use crate::error::{DatasetError, Result};
use crate::generation::{
    Distribution, FittedSampler, GeneratedRecordSet, GenerationRequest, round_to,
};
use crate::stats::{CorrelationMatrix, Histogram, Statistic, SummaryStatistics};
use crate::table::{Table, loader};
use crate::traits::Describe;

/// Ordered `(column, value)` pairs.
pub type ColumnValues = Vec<(String, f64)>;

/// A loaded measurement table with its summary statistics.
///
/// The summary is computed once at construction. Every other operation is a
/// pure function of the table, the summary and the request; randomness comes
/// in through the caller's generator.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: Table,
    summary: SummaryStatistics,
}

impl Dataset {
    /// Load the file described by `config` and summarise it.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let table = loader::load_path(config)?;
        Ok(Self::from_table(table))
    }

    pub fn from_table(table: Table) -> Self {
        let summary = table.describe();
        Self { table, summary }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Summary statistics, optionally restricted to `columns` in request order.
    pub fn get_summary(&self, columns: Option<&[&str]>) -> Result<SummaryStatistics> {
        match columns {
            None => Ok(self.summary.clone()),
            Some(cols) => self.summary.select(cols),
        }
    }

    /// Mean of each requested column (all columns when `None`).
    pub fn get_mean(&self, columns: Option<&[&str]>) -> Result<ColumnValues> {
        Ok(self.get_summary(columns)?.row(Statistic::Mean))
    }

    /// Spread of each requested column as used for the normal scale.
    ///
    /// Despite the name this reports the standard deviation row of the
    /// summary, not its square. Generation relies on it as is.
    pub fn get_variance(&self, columns: Option<&[&str]>) -> Result<ColumnValues> {
        Ok(self.get_summary(columns)?.row(Statistic::Std))
    }

    /// Resolve `distribution` against the statistics of `column`.
    pub fn fit(&self, column: &str, distribution: Distribution) -> Result<FittedSampler> {
        let summary = self.summary.get(column)?;
        FittedSampler::fit(distribution, summary.mean, summary.std)
    }

    /// Draw `sample_count` unrounded samples for `column`.
    pub fn generate_samples<R: Rng + ?Sized>(
        &self,
        column: &str,
        sample_count: usize,
        distribution: Distribution,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        if sample_count == 0 {
            return Err(DatasetError::invalid_parameter("sample count must be positive"));
        }
        self.fit(column, distribution)?.draw(sample_count, rng)
    }

    /// Like [`Dataset::generate_samples`], rounded to two decimals.
    pub fn generate_samples_rounded<R: Rng + ?Sized>(
        &self,
        column: &str,
        sample_count: usize,
        distribution: Distribution,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        let mut samples = self.generate_samples(column, sample_count, distribution, rng)?;
        for v in samples.iter_mut() {
            *v = round_to(*v, GENERATED_DECIMALS);
        }
        Ok(samples)
    }

    /// Generate `sample_count` records, each column drawn independently.
    pub fn generate_records<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        columns: &[S],
        sample_count: usize,
        distribution: Distribution,
        rng: &mut R,
    ) -> Result<GeneratedRecordSet> {
        self.generate(&GenerationRequest::new(columns, sample_count, distribution), rng)
    }

    /// Run a full generation request.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GeneratedRecordSet> {
        request.validate()?;
        // Fit every column before drawing so a bad column fails the whole request.
        let samplers = request
            .columns
            .iter()
            .map(|c| self.fit(c, request.distribution))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            columns = request.columns.len(),
            records = request.sample_count,
            distribution = %request.distribution,
            "generating records"
        );
        let mut data = Vec::with_capacity(samplers.len());
        for sampler in &samplers {
            let mut col = sampler.draw(request.sample_count, rng)?;
            for v in col.iter_mut() {
                *v = round_to(*v, GENERATED_DECIMALS);
            }
            data.push(col);
        }
        GeneratedRecordSet::from_columns(request.columns.clone(), data, request.sample_count)
    }

    /// Bin the observed column and a fresh sample for side-by-side display.
    pub fn compare_histograms<R: Rng + ?Sized>(
        &self,
        column: &str,
        sample_count: usize,
        distribution: Distribution,
        bins: usize,
        rng: &mut R,
    ) -> Result<(Histogram, Histogram)> {
        let observed: Vec<f64> = self.table.column(column)?.to_vec();
        let generated = self.generate_samples(column, sample_count, distribution, rng)?;
        Ok((
            Histogram::from_values(&observed, bins)?,
            Histogram::from_values(&generated, bins)?,
        ))
    }

    /// Pearson correlation between the requested columns.
    pub fn correlation<S: AsRef<str>>(&self, columns: &[S]) -> Result<CorrelationMatrix> {
        if columns.is_empty() {
            return Err(DatasetError::invalid_parameter("no columns requested"));
        }
        Ok(self.table.select(columns)?.correlation())
    }
}

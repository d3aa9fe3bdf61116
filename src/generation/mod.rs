// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Synthetic data generation from distributions fitted to column statistics.
//!
//! Each family takes its parameters from the empirical summary of one column:
//!
//! | Family | Parameters |
//! |---|---|
//! | [`Distribution::Poisson`] | λ = mean |
//! | [`Distribution::Normal`] | loc = mean, scale = std |
//! | [`Distribution::NegativeBinomial`] | n = mean, p = caller supplied |
//!
//! Columns are drawn independently, so correlation between source columns is
//! not carried over into generated records.

pub mod records;
pub mod sampler;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{DatasetError, Result};

pub use records::{GeneratedRecordSet, GenerationRequest};
pub use sampler::FittedSampler;

/// Distribution family with the parameters the caller must supply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Poisson,
    Normal,
    /// `prob` is the success probability, in `(0, 1]`.
    NegativeBinomial { prob: f64 },
}

/// Loose parameters as read from a user request, before dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistributionParams {
    pub prob: Option<f64>,
}

impl Distribution {
    /// Names accepted by [`Distribution::from_name`].
    pub const NAMES: [&'static str; 3] = ["poisson", "normal", "negative_binomial"];

    /// Negative binomial with a checked success probability.
    pub fn negative_binomial(prob: f64) -> Result<Self> {
        check_prob(prob)?;
        Ok(Self::NegativeBinomial { prob })
    }

    /// Resolve a family by name, pulling any required parameter from `params`.
    pub fn from_name(name: &str, params: DistributionParams) -> Result<Self> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "poisson" => Ok(Self::Poisson),
            "normal" => Ok(Self::Normal),
            "negative_binomial" => {
                let prob = params.prob.ok_or_else(|| {
                    DatasetError::invalid_parameter("negative_binomial requires 'prob'")
                })?;
                Self::negative_binomial(prob)
            }
            _ => Err(DatasetError::unsupported_distribution(name)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Poisson => Self::NAMES[0],
            Self::Normal => Self::NAMES[1],
            Self::NegativeBinomial { .. } => Self::NAMES[2],
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeBinomial { prob } => write!(f, "{}(prob={prob})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

pub(crate) fn check_prob(prob: f64) -> Result<()> {
    if prob > 0.0 && prob <= 1.0 {
        Ok(())
    } else {
        Err(DatasetError::invalid_parameter(format!(
            "prob must be in (0, 1], got {prob}"
        )))
    }
}

/// Random generator for sampling.
///
/// With a seed the sequence is reproducible; without one it is seeded from
/// operating system entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

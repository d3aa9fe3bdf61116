// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;
use rand_distr::{Distribution as _, Gamma, Normal, Poisson};
use tracing::{debug, warn};

use super::{Distribution, check_prob};
use crate::error::{DatasetError, Result};

/// A distribution family with its parameters resolved from column statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FittedSampler {
    Poisson { lambda: f64 },
    Normal { loc: f64, scale: f64 },
    /// `n` is the empirical mean, used as the number of successes.
    NegativeBinomial { n: f64, prob: f64 },
}

impl FittedSampler {
    /// Parameterise `distribution` from a column's `mean` and `scale`.
    ///
    /// `scale` is whatever the dataset reports as the column's spread; for the
    /// cytokine tables that is the standard deviation.
    pub fn fit(distribution: Distribution, mean: f64, scale: f64) -> Result<Self> {
        let fitted = match distribution {
            Distribution::Poisson => {
                if !mean.is_finite() || mean < 0.0 {
                    return Err(DatasetError::invalid_parameter(format!(
                        "poisson rate must be finite and non-negative, got {mean}"
                    )));
                }
                Self::Poisson { lambda: mean }
            }
            Distribution::Normal => {
                if !mean.is_finite() || !scale.is_finite() || scale < 0.0 {
                    return Err(DatasetError::invalid_parameter(format!(
                        "normal needs finite loc and non-negative scale, got loc={mean}, scale={scale}"
                    )));
                }
                Self::Normal { loc: mean, scale }
            }
            Distribution::NegativeBinomial { prob } => {
                check_prob(prob)?;
                if !mean.is_finite() || mean <= 0.0 {
                    return Err(DatasetError::invalid_parameter(format!(
                        "negative_binomial n must be positive, got {mean}"
                    )));
                }
                Self::NegativeBinomial { n: mean, prob }
            }
        };
        debug!(sampler = ?fitted, "fitted distribution");
        Ok(fitted)
    }

    /// Draw `count` independent samples.
    pub fn draw<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<f64>> {
        match *self {
            Self::Poisson { lambda } => {
                if lambda == 0.0 {
                    warn!("poisson rate is zero; every sample is 0");
                    return Ok(vec![0.0; count]);
                }
                let dist = Poisson::new(lambda).map_err(|e| {
                    DatasetError::invalid_parameter(format!("poisson(lambda={lambda}): {e}"))
                })?;
                Ok((0..count).map(|_| dist.sample(rng)).collect())
            }
            Self::Normal { loc, scale } => {
                if scale == 0.0 {
                    warn!(loc, "normal scale is zero; every sample equals loc");
                }
                let dist = Normal::new(loc, scale).map_err(|e| {
                    DatasetError::invalid_parameter(format!("normal(loc={loc}, scale={scale}): {e}"))
                })?;
                Ok((0..count).map(|_| dist.sample(rng)).collect())
            }
            Self::NegativeBinomial { n, prob } => {
                if prob == 1.0 {
                    warn!("negative_binomial prob is one; every sample is 0");
                    return Ok(vec![0.0; count]);
                }
                // Gamma-Poisson mixture: X ~ Poisson(Y), Y ~ Gamma(n, (1 - p) / p).
                let gamma = Gamma::new(n, (1.0 - prob) / prob).map_err(|e| {
                    DatasetError::invalid_parameter(format!(
                        "negative_binomial(n={n}, prob={prob}): {e}"
                    ))
                })?;
                let mut out = Vec::with_capacity(count);
                for _ in 0..count {
                    let rate: f64 = gamma.sample(rng);
                    if rate <= 0.0 {
                        out.push(0.0);
                        continue;
                    }
                    let poisson = Poisson::new(rate).map_err(|e| {
                        DatasetError::invalid_parameter(format!("poisson(lambda={rate}): {e}"))
                    })?;
                    out.push(poisson.sample(rng));
                }
                Ok(out)
            }
        }
    }
}

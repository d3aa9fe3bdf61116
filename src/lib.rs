// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # cytosim
//!
//! Descriptive statistics and parametric simulation for small tables of
//! cytokine measurements (mean fluorescence intensity, MFI).
//!
//! ## Quick Start
//!
//! ```rust
//! use cytosim::config::DatasetConfig;
//! use cytosim::generation::{create_rng, Distribution};
//! use cytosim::table::loader::load_str;
//! use cytosim::Dataset;
//!
//! let csv = ",,IL-6,TNF\n,Sample ID,MFI,MFI\n,S1,1.0,10.0\n,S2,2.0,12.0\n,S3,3.0,11.0\n";
//! let table = load_str(csv, &DatasetConfig::default()).unwrap();
//! let dataset = Dataset::from_table(table);
//!
//! let mut rng = create_rng(Some(42));
//! let records = dataset
//!     .generate_records(&["IL-6", "TNF"], 5, Distribution::Normal, &mut rng)
//!     .unwrap();
//! assert_eq!(records.shape(), (5, 2));
//! ```
//!
//! ## Distributions
//!
//! | Family | Fitted from |
//! |--------|-------------|
//! | Poisson | λ = column mean |
//! | Normal | loc = column mean, scale = column std |
//! | Negative binomial | n = column mean, p = caller supplied |
//!
//! Columns are simulated independently of each other. Compare the
//! [`stats::CorrelationMatrix`] of observed and generated tables to see the
//! structure that is lost.
//!
//! ## Architecture
//!
//! 1. **Table layer**: [`table::Table`] and the panel loader in [`table::loader`]
//! 2. **Statistics**: summaries, histograms and correlation in [`stats`]
//! 3. **Generation**: distribution dispatch and sampling in [`generation`]
//! 4. **Dataset**: [`Dataset`] ties the table, its summary and generation together
//! 5. **Presentation**: PNG charts in [`plot`] and the `cytosim` binary

pub mod config;
pub mod dataset;
pub mod error;
pub mod generation;
pub mod plot;
pub mod stats;
pub mod table;
pub mod traits;

pub use dataset::{ColumnValues, Dataset};
pub use error::{DatasetError, Result};
pub use traits::Describe;

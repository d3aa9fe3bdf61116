// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Descriptive statistics, binning and correlation over table columns.

pub mod correlation;
pub mod histogram;
pub mod summary;

pub use correlation::CorrelationMatrix;
pub use histogram::Histogram;
pub use summary::{ColumnSummary, Statistic, SummaryStatistics};

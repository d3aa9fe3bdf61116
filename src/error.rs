// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for loading, summarising and simulating datasets.

use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors raised by the dataset core.
///
/// All errors are raised synchronously and none are retried; an operation
/// either returns its full output or one of these variants.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Malformed or unexpected input file shape.
    #[error("Format error: {0}")]
    Format(String),

    /// A requested column does not exist.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A distribution name outside the supported families.
    #[error("Unsupported distribution: {0}")]
    UnsupportedDistribution(String),

    /// A parameter outside its domain (probability, sample count, fitted statistic).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Chart rendering failed.
    #[error("Render error: {0}")]
    Render(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// Create a format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create an unknown column error.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn(name.into())
    }

    /// Create an unsupported distribution error.
    pub fn unsupported_distribution(name: impl Into<String>) -> Self {
        Self::UnsupportedDistribution(name.into())
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

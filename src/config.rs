// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader configuration and shared defaults.

use std::path::{Path, PathBuf};

/// Default location of the cytokine measurement file.
pub const DEFAULT_SOURCE_PATH: &str = "data/norm_cytokine_data.csv";

/// Number of records drawn for a simulated histogram.
pub const DEFAULT_HISTOGRAM_RECORDS: usize = 126;

/// Number of equal-width bins used when binning a column.
pub const DEFAULT_BINS: usize = 10;

/// Number of records generated when no count is given.
pub const DEFAULT_RECORDS: usize = 1;

/// Decimal places kept in generated records.
pub const GENERATED_DECIMALS: i32 = 2;

/// Describes where the measurement file lives and how its layout is read.
///
/// The defaults match the export layout of the normal cytokine panel: an
/// unnamed second column holds the sample IDs, the first data row repeats the
/// `Sample ID` label, and spreadsheet padding columns come out unnamed.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    pub source_path: PathBuf,
    pub delimiter: char,
    /// Header of the column holding sample IDs.
    pub index_column: String,
    /// Name given to the index once loaded.
    pub index_name: String,
    /// Index value of the label row to discard.
    pub label_row: String,
    /// Substring marking placeholder columns to drop.
    pub placeholder_pattern: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            delimiter: ',',
            index_column: "Unnamed: 1".to_string(),
            index_name: "Sample_ID".to_string(),
            label_row: "Sample ID".to_string(),
            placeholder_pattern: "Unnamed".to_string(),
        }
    }
}

impl DatasetConfig {
    pub fn new(source_path: impl AsRef<Path>) -> Self {
        Self {
            source_path: source_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_index_column(mut self, index_column: impl Into<String>) -> Self {
        self.index_column = index_column.into();
        self
    }

    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    pub fn with_label_row(mut self, label_row: impl Into<String>) -> Self {
        self.label_row = label_row.into();
        self
    }

    pub fn with_placeholder_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.placeholder_pattern = pattern.into();
        self
    }

    /// Whether a header names a placeholder column.
    pub fn is_placeholder(&self, header: &str) -> bool {
        !self.placeholder_pattern.is_empty() && header.contains(&self.placeholder_pattern)
    }
}

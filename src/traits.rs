// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::generation::GeneratedRecordSet;
use crate::stats::{CorrelationMatrix, SummaryStatistics};
use crate::table::Table;

/// Column-wise descriptive statistics of a labelled numeric table.
pub trait Describe {
    /// Compute the describe-style summary of every column.
    fn describe(&self) -> SummaryStatistics;

    /// Pearson correlation between every pair of columns.
    fn correlation(&self) -> CorrelationMatrix;
}

impl Describe for Table {
    fn describe(&self) -> SummaryStatistics {
        SummaryStatistics::compute(self.columns(), self.values())
    }

    fn correlation(&self) -> CorrelationMatrix {
        CorrelationMatrix::pearson(self.columns(), self.values())
    }
}

/// Lets observed and generated tables be compared on the same footing.
impl Describe for GeneratedRecordSet {
    fn describe(&self) -> SummaryStatistics {
        SummaryStatistics::compute(self.columns(), self.values())
    }

    fn correlation(&self) -> CorrelationMatrix {
        CorrelationMatrix::pearson(self.columns(), self.values())
    }
}

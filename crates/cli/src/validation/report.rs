// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of a validation run and its human-readable report.

use std::io::{self, Write};

use super::defect::Defect;

/// Number of defects printed when no limit is given
pub const DEFAULT_REPORT_LIMIT: usize = 50;

/// Result of scanning one dataset
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    processed: usize,
    defects: Vec<Defect>,
}

impl Outcome {
    pub fn new(processed: usize, defects: Vec<Defect>) -> Self {
        Self { processed, defects }
    }

    /// Non-blank lines scanned, whether or not they decoded
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Defects in detection order
    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    pub fn error_count(&self) -> usize {
        self.defects.len()
    }

    pub fn is_ok(&self) -> bool {
        self.defects.is_empty()
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }

    /// Write the report, listing at most `limit` defects.
    pub fn write_report<W: Write>(&self, writer: &mut W, limit: usize) -> io::Result<()> {
        if self.is_ok() {
            return writeln!(
                writer,
                "OK: {} lines valid ChatML prompt/completion",
                self.processed
            );
        }

        writeln!(writer, "Validation failed:")?;
        for defect in self.defects.iter().take(limit) {
            writeln!(writer, " - {}", defect)?;
        }
        writeln!(
            writer,
            "Total errors: {} on {} lines",
            self.error_count(),
            self.processed
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

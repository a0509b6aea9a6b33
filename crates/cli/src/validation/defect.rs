// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural defects found while linting a dataset.

use std::fmt;

/// What went wrong with a single record
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefectKind {
    /// The line could not be decoded as JSON (carries the parser message)
    InvalidJson(String),
    /// The line decoded to something other than an object
    NotAnObject,
    /// `prompt` or `completion` is absent
    MissingField,
    /// `prompt` or `completion` is present but not a string
    NonStringField,
    /// The prompt does not contain the given marker
    MissingMarker(String),
    /// The trimmed prompt does not end with the given marker
    MissingTerminator(String),
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefectKind::InvalidJson(err) => write!(f, "invalid JSON - {}", err),
            DefectKind::NotAnObject => write!(f, "not a JSON object"),
            DefectKind::MissingField => write!(f, "missing 'prompt' or 'completion'"),
            DefectKind::NonStringField => write!(f, "'prompt'/'completion' must be strings"),
            DefectKind::MissingMarker(marker) => write!(f, "prompt missing tag {}", marker),
            DefectKind::MissingTerminator(marker) => {
                write!(f, "prompt should end with '{}'", marker)
            }
        }
    }
}

/// A validation failure tied to a 1-based physical line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Defect {
    line: usize,
    kind: DefectKind,
}

impl Defect {
    pub fn new(line: usize, kind: DefectKind) -> Self {
        Self { line, kind }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &DefectKind {
        &self.kind
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

#[cfg(test)]
#[path = "defect_tests.rs"]
mod tests;

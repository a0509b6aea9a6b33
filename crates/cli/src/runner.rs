// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-by-line scan of a JSONL dataset.
//!
//! Every problem with an individual line becomes a [`Defect`] and the scan
//! carries on. Only failing to open or read the input stops a run.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::decode::decode_line;
use crate::lines::PhysicalLines;
use crate::validation::text::strip;
use crate::validation::{validate_record, Defect, DefectKind, Markers, Outcome};

/// Fatal errors that abort a validation run
#[derive(Debug, Error)]
pub enum LintError {
    #[error("Failed to open input file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Validate the dataset at `path`.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn validate_file(path: &Path, markers: &Markers) -> Result<Outcome, LintError> {
    let file = File::open(path).map_err(|source| LintError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    validate_reader(BufReader::new(file), markers)
}

/// Validate every line of `reader`.
///
/// Lines are numbered from 1 over the physical lines of the input, split on
/// `\n`, `\r\n` and lone `\r`. Lines that are blank after stripping keep their
/// number but are neither counted nor checked.
pub fn validate_reader<R: BufRead>(reader: R, markers: &Markers) -> Result<Outcome, LintError> {
    let mut processed = 0;
    let mut defects = Vec::new();

    for (index, line) in PhysicalLines::new(reader).enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| LintError::Read {
            line: number,
            source,
        })?;
        let text = strip(&line);
        if text.is_empty() {
            debug!(line = number, "skipping blank line");
            continue;
        }
        processed += 1;

        match decode_line(text) {
            Ok(value) => {
                let found = validate_record(&value, number, markers);
                for defect in &found {
                    debug!(line = number, defect = %defect.kind(), "record defect");
                }
                defects.extend(found);
            }
            Err(err) => {
                debug!(line = number, error = %err, "line is not valid JSON");
                defects.push(Defect::new(number, DefectKind::InvalidJson(err.to_string())));
            }
        }
    }

    let outcome = Outcome::new(processed, defects);
    info!(processed, defects = outcome.error_count(), "scan complete");
    Ok(outcome)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

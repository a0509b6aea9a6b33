// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for binary integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// A record that passes every check
pub const VALID: &str = r#"{"prompt": "<|user|>hi<|assistant|>", "completion": "hello"}"#;

/// A record that fails only the missing-field check
pub const MISSING_PROMPT: &str = r#"{"completion": "hello"}"#;

/// Write `lines` to a temporary `.jsonl` file, one per line.
pub fn write_dataset(lines: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".jsonl")
        .tempfile()
        .unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Command for the chatml-lint binary with `--input` pointing at `dataset`.
#[allow(deprecated)] // Command::cargo_bin is deprecated but still functional
pub fn lint(dataset: &NamedTempFile) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("chatml-lint").unwrap();
    cmd.env_remove("CHATML_LINT_LOG")
        .env_remove("CHATML_LINT_MAX_ERRORS")
        .env_remove("CHATML_LINT_USER_TAG")
        .env_remove("CHATML_LINT_ASSISTANT_TAG")
        .arg("--input")
        .arg(dataset.path());
    cmd
}

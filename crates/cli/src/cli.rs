// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::builder::{NonEmptyStringValueParser, TypedValueParser};
use clap::Parser;

use crate::env;
use crate::validation::{Markers, ASSISTANT_MARKER, DEFAULT_REPORT_LIMIT, USER_MARKER};

/// Validate a ChatML prompt/completion JSONL dataset
#[derive(Parser, Clone, Debug)]
#[command(name = "chatml-lint", version, about = "ChatML JSONL dataset validator")]
pub struct Cli {
    /// ChatML JSONL file to validate
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Maximum number of errors to list in the report
    #[arg(
        long,
        env = env::MAX_ERRORS,
        default_value_t = DEFAULT_REPORT_LIMIT,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize),
    )]
    pub max_errors: usize,

    /// Marker that opens a user turn
    #[arg(
        long,
        env = env::USER_TAG,
        default_value = USER_MARKER,
        value_parser = NonEmptyStringValueParser::new(),
    )]
    pub user_tag: String,

    /// Marker that opens the assistant turn; prompts must end with it
    #[arg(
        long,
        env = env::ASSISTANT_TAG,
        default_value = ASSISTANT_MARKER,
        value_parser = NonEmptyStringValueParser::new(),
    )]
    pub assistant_tag: String,

    /// Log each line as it is checked (to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Markers the prompts are checked against
    pub fn markers(&self) -> Markers {
        Markers::new(&self.user_tag, &self.assistant_tag)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

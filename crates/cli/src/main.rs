// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! chatml-lint binary entry point.

use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatml_lint::cli::Cli;
use chatml_lint::diagnostic::{print_error, print_warning};
use chatml_lint::env;
use chatml_lint::runner::validate_file;

/// Exit status for failures outside the report (unreadable input, broken stdout)
const EXIT_FATAL: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    std::process::exit(run(&cli));
}

/// Scan the input and print the report, returning the exit status.
fn run(cli: &Cli) -> i32 {
    let outcome = match validate_file(&cli.input, &cli.markers()) {
        Ok(outcome) => outcome,
        Err(e) => {
            print_error(e);
            return EXIT_FATAL;
        }
    };

    if outcome.processed() == 0 {
        print_warning(format_args!("no records found in {}", cli.input.display()));
    }

    let mut stdout = io::stdout().lock();
    let written = outcome
        .write_report(&mut stdout, cli.max_errors)
        .and_then(|()| stdout.flush());
    if let Err(e) = written {
        print_error(format_args!("Failed to write report: {}", e));
        return EXIT_FATAL;
    }

    outcome.exit_code()
}

/// Log to stderr. `--verbose` wins over `CHATML_LINT_LOG`; the default shows warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        env::log_filter()
            .map(EnvFilter::new)
            .unwrap_or_else(|| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

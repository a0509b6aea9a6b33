// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning lines on stderr.
//!
//! Lines are colored when stderr is a terminal and plain otherwise, so the
//! stdout report stays machine-diffable.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// How loudly a diagnostic is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    /// SGR foreground color code
    fn color(self) -> u8 {
        match self {
            Severity::Error => 31,
            Severity::Warning => 33,
        }
    }
}

/// Print an error message to stderr.
pub fn print_error(msg: impl Display) {
    emit(Severity::Error, msg);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl Display) {
    emit(Severity::Warning, msg);
}

fn emit(severity: Severity, msg: impl Display) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_diagnostic(&mut stderr.lock(), severity, msg, is_tty);
}

/// Write one diagnostic line with an explicit terminal flag.
fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl Display,
    is_terminal: bool,
) {
    let label = severity.label();
    let _ = if is_terminal {
        writeln!(writer, "\x1b[{}m{}: {}\x1b[0m", severity.color(), label, msg)
    } else {
        writeln!(writer, "{}: {}", label, msg)
    };
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;

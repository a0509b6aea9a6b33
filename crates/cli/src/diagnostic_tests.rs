// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn render(severity: Severity, msg: impl Display, is_terminal: bool) -> String {
    let mut buf = Vec::new();
    write_diagnostic(&mut buf, severity, msg, is_terminal);
    String::from_utf8(buf).unwrap()
}

#[parameterized(
    error_plain = { Severity::Error, false, "Error: input unreadable\n" },
    error_tty = { Severity::Error, true, "\x1b[31mError: input unreadable\x1b[0m\n" },
    warning_plain = { Severity::Warning, false, "Warning: input unreadable\n" },
    warning_tty = { Severity::Warning, true, "\x1b[33mWarning: input unreadable\x1b[0m\n" },
)]
fn diagnostic_line(severity: Severity, is_terminal: bool, expected: &str) {
    assert_eq!(render(severity, "input unreadable", is_terminal), expected);
}

#[test]
fn diagnostic_with_format_args() {
    let output = render(
        Severity::Warning,
        format_args!("no records found in {}", "empty.jsonl"),
        false,
    );
    assert_eq!(output, "Warning: no records found in empty.jsonl\n");
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Cursor;
use yare::parameterized;

fn collect(input: &[u8]) -> Vec<String> {
    PhysicalLines::new(Cursor::new(input))
        .collect::<io::Result<Vec<_>>>()
        .unwrap()
}

#[parameterized(
    lf = { b"A\nB\n", &["A", "B"] },
    crlf = { b"A\r\nB\r\n", &["A", "B"] },
    lone_cr = { b"A\rB\r", &["A", "B"] },
    mixed = { b"A\rB\r\nC\nD", &["A", "B", "C", "D"] },
    no_trailing_terminator = { b"A\nB", &["A", "B"] },
    blank_lines = { b"\n\r\r\n", &["", "", ""] },
    cr_then_crlf = { b"A\r\r\nB", &["A", "", "B"] },
    empty = { b"", &[] },
)]
fn splits_on_every_terminator(input: &[u8], expected: &[&str]) {
    assert_eq!(collect(input), expected);
}

#[test]
fn test_multibyte_text_survives_split() {
    let input = "héllo\r<|user|>ü\n".as_bytes();
    assert_eq!(collect(input), vec!["héllo", "<|user|>ü"]);
}

#[test]
fn test_invalid_utf8_is_an_error() {
    let mut lines = PhysicalLines::new(Cursor::new(&b"ok\n\xff\n"[..]));
    assert_eq!(lines.next().unwrap().unwrap(), "ok");
    let err = lines.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

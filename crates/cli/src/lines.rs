// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Physical lines of a UTF-8 text stream.
//!
//! `\n`, `\r\n` and a lone `\r` each end a line, the way a universal-newline
//! text reader splits the files these datasets come from.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Iterator over the physical lines of `reader`, terminators removed.
pub struct PhysicalLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> PhysicalLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for PhysicalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }

            let chunk = match std::str::from_utf8(&self.buf) {
                Ok(chunk) => chunk,
                Err(e) => return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e))),
            };
            self.pending
                .extend(split_terminators(chunk).into_iter().map(str::to_owned));
        }
    }
}

/// Split a chunk ending in `\n` (or at end of input) on every line terminator.
fn split_terminators(chunk: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = chunk;
    while let Some(end) = rest.find(['\r', '\n']) {
        lines.push(&rest[..end]);
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;

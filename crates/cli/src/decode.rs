// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON decoding for dataset lines.
//!
//! Python's `json` module writes non-finite floats as the bare literals
//! `NaN`, `Infinity` and `-Infinity` and reads them back, so datasets dumped
//! from Python can carry them. A line that only decodes once those literals
//! are accepted is read with each literal as `null`. Both are non-string,
//! non-object values, which is all the record checks distinguish.

use serde_json::Value;

/// Literals outside strings that stand for non-finite floats, longest first.
const NON_FINITE: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Decode one trimmed line. Errors are those of the strict parse.
pub fn decode_line(text: &str) -> Result<Value, serde_json::Error> {
    let err = match serde_json::from_str(text) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    match replace_non_finite(text) {
        Some(patched) => serde_json::from_str(&patched).map_err(|_| err),
        None => Err(err),
    }
}

/// Rewrite non-finite literals outside strings as `null`, or `None` if there are none.
fn replace_non_finite(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut replaced = false;
    let mut in_string = false;
    let mut chars = text.char_indices();

    while let Some((at, c)) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if let Some(literal) = NON_FINITE.iter().find(|l| text[at..].starts_with(**l)) {
            out.push_str("null");
            replaced = true;
            // Literals are ASCII: one char per byte.
            for _ in 1..literal.len() {
                chars.next();
            }
            continue;
        }

        out.push(c);
    }

    replaced.then_some(out)
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace handling shared by the line scan and the prompt checks.

/// Whitespace as Python's `str.isspace` sees it: Unicode `White_Space` plus
/// the information separators U+001C..=U+001F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing whitespace in the sense of [`is_space`].
pub fn strip(text: &str) -> &str {
    text.trim_matches(is_space)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural checks for a single decoded prompt/completion record.
//!
//! Checks run in a fixed order. A non-object value or a missing field stops
//! the checks for that record; every later check is independent and all of
//! their defects are reported together.

use serde_json::{Map, Value};

use super::defect::{Defect, DefectKind};
use super::text::strip;

/// Default marker opening a user turn
pub const USER_MARKER: &str = "<|user|>";

/// Default marker opening the assistant turn
pub const ASSISTANT_MARKER: &str = "<|assistant|>";

/// Role markers every prompt must carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    pub user: String,
    pub assistant: String,
}

impl Markers {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }

    /// Markers in the order their absence is reported
    fn required(&self) -> [&str; 2] {
        [self.user.as_str(), self.assistant.as_str()]
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(USER_MARKER, ASSISTANT_MARKER)
    }
}

/// Shape of a record field after lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field<'a> {
    Missing,
    Text(&'a str),
    Other,
}

impl<'a> Field<'a> {
    fn lookup(record: &'a Map<String, Value>, key: &str) -> Self {
        match record.get(key) {
            None => Field::Missing,
            Some(Value::String(text)) => Field::Text(text),
            Some(_) => Field::Other,
        }
    }

    fn is_missing(self) -> bool {
        matches!(self, Field::Missing)
    }

    fn is_text(self) -> bool {
        matches!(self, Field::Text(_))
    }

    /// Text used by the marker checks; anything that isn't a string reads as empty.
    fn text(self) -> &'a str {
        match self {
            Field::Text(text) => text,
            Field::Missing | Field::Other => "",
        }
    }
}

/// Validate one decoded record from `line`, returning its defects in check order.
pub fn validate_record(value: &Value, line: usize, markers: &Markers) -> Vec<Defect> {
    let Value::Object(record) = value else {
        return vec![Defect::new(line, DefectKind::NotAnObject)];
    };

    let prompt = Field::lookup(record, "prompt");
    let completion = Field::lookup(record, "completion");
    if prompt.is_missing() || completion.is_missing() {
        return vec![Defect::new(line, DefectKind::MissingField)];
    }

    let mut defects = Vec::new();
    if !prompt.is_text() || !completion.is_text() {
        defects.push(Defect::new(line, DefectKind::NonStringField));
    }

    let prompt = prompt.text();
    for marker in markers.required() {
        if !prompt.contains(marker) {
            defects.push(Defect::new(line, DefectKind::MissingMarker(marker.to_string())));
        }
    }

    if !strip(prompt).ends_with(markers.assistant.as_str()) {
        defects.push(Defect::new(line, DefectKind::MissingTerminator(markers.assistant.clone())));
    }

    defects
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

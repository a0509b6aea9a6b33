// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-record validation of ChatML prompt/completion datasets.

pub mod defect;
pub mod record;
pub mod report;
pub mod text;

pub use defect::{Defect, DefectKind};
pub use record::{validate_record, Markers, ASSISTANT_MARKER, USER_MARKER};
pub use report::{Outcome, DEFAULT_REPORT_LIMIT};

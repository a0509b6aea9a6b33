// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ChatML dataset linter
//!
//! Checks a JSONL file of `{"prompt": ..., "completion": ...}` records before
//! it is handed to a fine-tuning pipeline. Each non-blank line must decode to
//! an object with string `prompt` and `completion` fields, and the prompt must
//! carry both role markers and end with the assistant marker.
//!
//! ```
//! use chatml_lint::runner::validate_reader;
//! use chatml_lint::validation::Markers;
//!
//! let data = r#"{"prompt": "<|user|>hi<|assistant|>", "completion": "hello"}
//!
//! {"prompt": "hi<|assistant|>", "completion": "hello"}
//! "#;
//!
//! let outcome = validate_reader(data.as_bytes(), &Markers::default()).unwrap();
//! assert_eq!(outcome.processed(), 2);
//! assert_eq!(outcome.defects()[0].to_string(), "line 3: prompt missing tag <|user|>");
//! ```

pub mod cli;
pub mod decode;
pub mod diagnostic;
pub mod env;
pub mod lines;
pub mod runner;
pub mod validation;

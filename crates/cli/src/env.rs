// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by chatml-lint are named here. Flags that
//! fall back to the environment go through clap; everything else uses the
//! accessors below.

/// `CHATML_LINT_MAX_ERRORS` — fallback for `--max-errors`.
pub const MAX_ERRORS: &str = "CHATML_LINT_MAX_ERRORS";

/// `CHATML_LINT_USER_TAG` — fallback for `--user-tag`.
pub const USER_TAG: &str = "CHATML_LINT_USER_TAG";

/// `CHATML_LINT_ASSISTANT_TAG` — fallback for `--assistant-tag`.
pub const ASSISTANT_TAG: &str = "CHATML_LINT_ASSISTANT_TAG";

/// `CHATML_LINT_LOG` — log filter directives (`tracing_subscriber::EnvFilter` syntax).
pub const LOG: &str = "CHATML_LINT_LOG";

/// Log filter from `CHATML_LINT_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(LOG).ok().filter(|v| !v.trim().is_empty())
}

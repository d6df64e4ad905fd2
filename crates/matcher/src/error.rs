// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::value::LowerError;

/// fluent-match error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No case matched the subject and no default was registered.
    #[error("no case matched subject {subject}")]
    NoMatch { subject: String },

    /// A subject or pattern could not be lowered to a comparable value.
    #[error("cannot compare {what}: {source}")]
    Lower {
        what: &'static str,
        #[source]
        source: LowerError,
    },

    /// Equality configuration is invalid
    #[error("config error: {message}")]
    Config { message: String },
}

impl Error {
    /// True when finalization found no case and no default.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Error::NoMatch { .. })
    }
}

/// Result type using fluent-match Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expression-oriented pattern matching.
//!
//! Register ordered cases against a subject, then finalize to the result of
//! the first case that matches:
//!
//! ```
//! use fluent_match::match_on;
//!
//! let len = match_on(1)
//!     .case(0, |_| "bb")
//!     .default(|_| "ccc")
//!     .exec_map(str::len)
//!     .unwrap();
//! assert_eq!(len, 3);
//! ```
//!
//! Literal cases compare through the process-wide [`oracle`], which defaults
//! to deep structural equality over each value's serde data model (see
//! [`value`]).

pub mod builder;
pub mod config;
pub mod equality;
pub mod error;
pub mod oracle;
pub mod value;

pub use builder::{EntryKind, MatchBuilder, match_on};
pub use config::EqualityConfig;
pub use equality::{DeepEqual, Equality, deep_equal};
pub use error::{Error, Result};
pub use oracle::{Comparator, OracleGuard};
pub use value::{LowerError, Value};

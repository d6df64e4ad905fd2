// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use std::cell::Cell;
pub use std::collections::BTreeMap;

pub use fluent_match::{
    DeepEqual, EqualityConfig, Error, MatchBuilder, Value, match_on, oracle,
};
pub use proptest::prelude::*;
pub use serde::Serialize;
pub use serde_json::json;

static ORACLE_LOCK: Mutex<()> = Mutex::new(());

/// Serialize access to the process-wide equality oracle.
///
/// Also restores the default comparator, so a spec that failed while holding
/// an override cannot leak it into the next one.
pub fn serial() -> MutexGuard<'static, ()> {
    let guard = ORACLE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    oracle::reset();
    guard
}

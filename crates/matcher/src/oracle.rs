// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The process-wide equality oracle.
//!
//! Every [`MatchBuilder`](crate::MatchBuilder) consults the oracle when it
//! compares a literal pattern against its subject. The oracle starts out as
//! [`DeepEqual`] with default settings and can be swapped at any time.
//!
//! Overrides are global: they are visible to every thread and every builder
//! finalized after the swap, including builders constructed before it. There
//! is no per-thread or per-task isolation. Code that needs a temporary
//! override should hold an [`OracleGuard`] from [`override_with`] for as
//! short a span as possible, and concurrent callers must coordinate among
//! themselves.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::equality::{DeepEqual, Equality};
use crate::value::Value;

/// A shared, installable comparison.
pub type Comparator = Arc<dyn Equality>;

struct Installed {
    comparator: Comparator,
    builtin: bool,
}

impl Installed {
    fn builtin() -> Self {
        Self {
            comparator: Arc::new(DeepEqual::default()),
            builtin: true,
        }
    }

    fn custom(comparator: Comparator) -> Self {
        Self {
            comparator,
            builtin: false,
        }
    }
}

static CURRENT: LazyLock<ArcSwap<Installed>> =
    LazyLock::new(|| ArcSwap::from_pointee(Installed::builtin()));

/// Install `custom` as the process-wide comparator, or restore the built-in
/// deep equality when `None`.
pub fn initialize(custom: Option<Comparator>) {
    match custom {
        Some(comparator) => {
            tracing::debug!("installing custom equality comparator");
            CURRENT.store(Arc::new(Installed::custom(comparator)));
        }
        None => reset(),
    }
}

/// Install a custom comparator.
pub fn set<E: Equality + 'static>(equality: E) {
    initialize(Some(Arc::new(equality)));
}

/// Restore the built-in deep equality.
pub fn reset() {
    tracing::debug!("resetting equality comparator to default");
    CURRENT.store(Arc::new(Installed::builtin()));
}

/// The comparator currently installed.
pub fn current() -> Comparator {
    Arc::clone(&CURRENT.load().comparator)
}

/// True while the built-in comparator is installed.
pub fn is_default() -> bool {
    CURRENT.load().builtin
}

/// Compare two values with the installed comparator.
pub fn compare(a: &Value, b: &Value) -> bool {
    CURRENT.load().comparator.equals(a, b)
}

/// Install `equality` until the returned guard is dropped.
///
/// The guard restores whatever was installed when it was created, so nested
/// guards unwind in reverse order.
pub fn override_with<E: Equality + 'static>(equality: E) -> OracleGuard {
    tracing::debug!("installing scoped equality comparator");
    let previous = CURRENT.swap(Arc::new(Installed::custom(Arc::new(equality))));
    OracleGuard {
        previous: Some(previous),
    }
}

/// Restores the previously installed comparator on drop.
#[must_use = "the override is undone as soon as the guard is dropped"]
pub struct OracleGuard {
    previous: Option<Arc<Installed>>,
}

impl Drop for OracleGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!("restoring previous equality comparator");
            CURRENT.store(previous);
        }
    }
}

impl std::fmt::Debug for OracleGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "oracle_tests.rs"]
mod tests;

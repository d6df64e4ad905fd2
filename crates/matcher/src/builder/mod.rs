// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent, expression-oriented matching.
//!
//! A [`MatchBuilder`] collects cases for one subject and evaluates to the
//! result of the first case whose test passes:
//!
//! ```
//! use fluent_match::match_on;
//!
//! let sign = match_on(-5)
//!     .case_guarded(|x| *x < 0, |_| "less")
//!     .case(0, |_| "zero")
//!     .case_guarded(|x| *x > 0, |_| "more")
//!     .exec()
//!     .unwrap();
//! assert_eq!(sign, "less");
//! ```
//!
//! Cases run strictly in registration order. Evaluation stops at the first
//! match: later tests are not run and later handlers never execute. The
//! default handler is kept apart from the ordered cases and only runs after
//! every case has been tried, wherever it was registered.

mod entry;

use std::fmt;

use serde::Serialize;

pub use entry::EntryKind;
use entry::{Evaluation, Handler, PatternEntry, Test, describe};

use crate::error::{Error, Result};
use crate::oracle;
use crate::value::Value;

/// Start a match expression over `subject`.
pub fn match_on<'a, T, R>(subject: T) -> MatchBuilder<'a, T, R>
where
    T: Serialize + 'a,
{
    MatchBuilder::new(subject)
}

/// Accumulates cases for a single subject. Finalizing consumes the builder.
#[must_use = "a match does nothing until it is finalized with exec"]
pub struct MatchBuilder<'a, T, R> {
    subject: T,
    entries: Vec<PatternEntry<'a, T, R>>,
    fallback: Option<Handler<'a, T, R>>,
}

/// What a finalization found.
enum Outcome<T, R> {
    Handled(R),
    Unhandled { subject: T, lowered: Option<Value> },
}

impl<T, R> MatchBuilder<'_, T, R> {
    /// Number of registered cases, not counting the default.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_default(&self) -> bool {
        self.fallback.is_some()
    }

    /// Kinds of the registered cases, in evaluation order.
    pub fn kinds(&self) -> impl Iterator<Item = EntryKind> + '_ {
        self.entries.iter().map(|entry| entry.test.kind())
    }
}

impl<'a, T, R> MatchBuilder<'a, T, R>
where
    T: Serialize + 'a,
{
    pub fn new(subject: T) -> Self {
        Self {
            subject,
            entries: Vec::new(),
            fallback: None,
        }
    }

    /// Match when the subject equals `pattern` under the equality oracle.
    pub fn case<H>(self, pattern: T, handler: H) -> Self
    where
        H: FnOnce(T) -> R + 'a,
    {
        self.push(Test::Literal(Box::new(pattern)), handler)
    }

    /// Like [`case`](Self::case), for a pattern of a different type.
    ///
    /// Comparison is structural, so a pattern struct with the same fields as
    /// the subject matches even though the types differ.
    pub fn case_like<P, H>(self, pattern: P, handler: H) -> Self
    where
        P: Serialize + 'a,
        H: FnOnce(T) -> R + 'a,
    {
        self.push(Test::Literal(Box::new(pattern)), handler)
    }

    /// Match when the subject equals any of `patterns`. An empty set never
    /// matches.
    pub fn case_multi<I, H>(self, patterns: I, handler: H) -> Self
    where
        I: IntoIterator<Item = T>,
        H: FnOnce(T) -> R + 'a,
    {
        self.push(Test::LiteralSet(patterns.into_iter().collect()), handler)
    }

    /// Match when `predicate` returns true for the subject.
    pub fn case_guarded<G, H>(self, predicate: G, handler: H) -> Self
    where
        G: FnOnce(&T) -> bool + 'a,
        H: FnOnce(T) -> R + 'a,
    {
        self.push(Test::Predicate(Box::new(predicate)), handler)
    }

    /// Handler used when no case matches. Registering again replaces it.
    pub fn default<H>(mut self, handler: H) -> Self
    where
        H: FnOnce(T) -> R + 'a,
    {
        if self.fallback.is_some() {
            tracing::trace!("replacing previously registered default");
        }
        self.fallback = Some(Box::new(handler));
        self
    }

    /// Evaluate the cases and return the selected handler's result.
    ///
    /// Fails with [`Error::NoMatch`] when nothing matched and no default is
    /// registered, or with [`Error::Lower`] when the subject or a pattern
    /// reached during evaluation cannot be lowered. Panics raised by handlers
    /// and predicates propagate unchanged.
    pub fn exec(self) -> Result<R> {
        match self.evaluate()? {
            Outcome::Handled(result) => Ok(result),
            Outcome::Unhandled { subject, lowered } => {
                let subject = describe(&subject, lowered);
                tracing::debug!("no case matched subject {}", subject);
                Err(Error::NoMatch { subject })
            }
        }
    }

    /// Like [`exec`](Self::exec), then apply `transform` to the result.
    /// `transform` is not called when evaluation fails.
    pub fn exec_map<S, F>(self, transform: F) -> Result<S>
    where
        F: FnOnce(R) -> S,
    {
        self.exec().map(transform)
    }

    /// Like [`exec`](Self::exec), but yields `fallback` instead of failing
    /// when nothing matched.
    pub fn exec_or(self, fallback: R) -> Result<R> {
        match self.evaluate()? {
            Outcome::Handled(result) => Ok(result),
            Outcome::Unhandled { .. } => {
                tracing::debug!("no case matched; using inline fallback");
                Ok(fallback)
            }
        }
    }

    fn push<H>(mut self, test: Test<'a, T>, handler: H) -> Self
    where
        H: FnOnce(T) -> R + 'a,
    {
        self.entries.push(PatternEntry {
            test,
            handler: Box::new(handler),
        });
        self
    }

    fn evaluate(self) -> Result<Outcome<T, R>> {
        let MatchBuilder {
            subject,
            entries,
            fallback,
        } = self;

        let mut evaluation = Evaluation::new(&subject, oracle::current());
        let mut selected = None;
        for (index, PatternEntry { test, handler }) in entries.into_iter().enumerate() {
            let kind = test.kind();
            if evaluation.matches(test)? {
                tracing::trace!("case {} ({:?}) matched", index, kind);
                selected = Some(handler);
                break;
            }
            tracing::trace!("case {} ({:?}) did not match", index, kind);
        }
        let lowered = evaluation.into_lowered();

        if let Some(handler) = selected {
            return Ok(Outcome::Handled(handler(subject)));
        }
        if let Some(fallback) = fallback {
            tracing::debug!("no case matched; running default");
            return Ok(Outcome::Handled(fallback(subject)));
        }

        Ok(Outcome::Unhandled { subject, lowered })
    }
}

impl<T: fmt::Debug, R> fmt::Debug for MatchBuilder<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<EntryKind> = self.kinds().collect();
        f.debug_struct("MatchBuilder")
            .field("subject", &self.subject)
            .field("cases", &kinds)
            .field("has_default", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

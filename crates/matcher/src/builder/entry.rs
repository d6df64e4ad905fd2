// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Registered cases and how each one tests a subject.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::oracle::Comparator;
use crate::value::{LowerError, Value};

pub(crate) type Handler<'a, T, R> = Box<dyn FnOnce(T) -> R + 'a>;
pub(crate) type Predicate<'a, T> = Box<dyn FnOnce(&T) -> bool + 'a>;

/// The kind of a registered case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A single value compared with the equality oracle.
    Literal,
    /// Several values; matches if any one is equal to the subject.
    LiteralSet,
    /// A caller-supplied predicate. The oracle is not consulted.
    Predicate,
}

/// A value that can be lowered for structural comparison.
pub(crate) trait Lower {
    fn lower(&self) -> std::result::Result<Value, LowerError>;
}

impl<P: Serialize> Lower for P {
    fn lower(&self) -> std::result::Result<Value, LowerError> {
        Value::from_serialize(self)
    }
}

/// How a case decides whether it matches.
pub(crate) enum Test<'a, T> {
    Literal(Box<dyn Lower + 'a>),
    LiteralSet(Vec<T>),
    Predicate(Predicate<'a, T>),
}

impl<T> Test<'_, T> {
    pub(crate) fn kind(&self) -> EntryKind {
        match self {
            Test::Literal(_) => EntryKind::Literal,
            Test::LiteralSet(_) => EntryKind::LiteralSet,
            Test::Predicate(_) => EntryKind::Predicate,
        }
    }
}

/// One registered (test, handler) pair.
pub(crate) struct PatternEntry<'a, T, R> {
    pub(crate) test: Test<'a, T>,
    pub(crate) handler: Handler<'a, T, R>,
}

/// State for one finalization: the subject, its lowered form (computed on
/// first use), and the comparator snapshot taken when evaluation began.
pub(crate) struct Evaluation<'s, T> {
    subject: &'s T,
    lowered: Option<Value>,
    comparator: Comparator,
}

impl<'s, T: Serialize> Evaluation<'s, T> {
    pub(crate) fn new(subject: &'s T, comparator: Comparator) -> Self {
        Self {
            subject,
            lowered: None,
            comparator,
        }
    }

    /// Run one test against the subject.
    ///
    /// Set members are lowered and compared left to right, stopping at the
    /// first equal one.
    pub(crate) fn matches(&mut self, test: Test<'_, T>) -> Result<bool> {
        match test {
            Test::Literal(pattern) => {
                let pattern = pattern.lower().map_err(pattern_error)?;
                self.equals(&pattern)
            }
            Test::LiteralSet(patterns) => {
                for pattern in &patterns {
                    let pattern = pattern.lower().map_err(pattern_error)?;
                    if self.equals(&pattern)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Test::Predicate(predicate) => Ok(predicate(self.subject)),
        }
    }

    fn equals(&mut self, pattern: &Value) -> Result<bool> {
        let subject = match self.lowered.take() {
            Some(value) => value,
            None => self.subject.lower().map_err(|source| Error::Lower {
                what: "subject",
                source,
            })?,
        };
        let equal = self.comparator.equals(&subject, pattern);
        self.lowered = Some(subject);
        Ok(equal)
    }

    /// The subject's lowered form, if any test needed it.
    pub(crate) fn into_lowered(self) -> Option<Value> {
        self.lowered
    }
}

fn pattern_error(source: LowerError) -> Error {
    Error::Lower {
        what: "pattern",
        source,
    }
}

/// Render a subject for a no-match error, falling back to its type name when
/// it cannot be lowered.
pub(crate) fn describe<T: Serialize>(subject: &T, lowered: Option<Value>) -> String {
    match lowered.map_or_else(|| subject.lower(), Ok) {
        Ok(value) => value.to_string(),
        Err(_) => std::any::type_name::<T>().to_string(),
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;

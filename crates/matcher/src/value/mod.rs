// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparable values lowered from any `Serialize` type.
//!
//! Lowering walks the serde data model and keeps every distinction the
//! model makes: `None`, `Some(None)` and `()` stay apart, floats keep their
//! infinities and NaN, 128-bit integers are exact, and map keys may be any
//! lowered value. Nominal names (struct and newtype names) are dropped, so
//! records compare by their fields alone.

mod ser;

use std::fmt;

use serde::Serialize;

pub use ser::LowerError;
use ser::ValueSerializer;

/// A lowered value.
///
/// Integers are canonical: non-negative integers are always [`Value::UInt`]
/// and [`Value::Int`] only ever holds negative ones.
///
/// The derived `PartialEq` is representation equality (map entry order
/// matters, NaN is unequal to itself). Matching uses
/// [`deep_equal`](crate::deep_equal) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `()`, unit structs
    Unit,
    Bool(bool),
    /// Negative integers
    Int(i128),
    /// Non-negative integers
    UInt(u128),
    Float(f64),
    /// Strings and chars
    String(String),
    Bytes(Vec<u8>),
    None,
    Some(Box<Value>),
    /// Sequences, tuples and tuple structs
    Seq(Vec<Value>),
    /// Maps and structs, in serialization order. Enum variants other than
    /// unit variants lower to a one-entry map keyed by the variant name.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Lower any serializable value.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, LowerError> {
        value.serialize(ValueSerializer)
    }

    pub(crate) fn integer(n: i128) -> Self {
        u128::try_from(n).map_or(Value::Int(n), Value::UInt)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Bytes(bytes) => write!(f, "b{:?}", String::from_utf8_lossy(bytes)),
            Value::None => f.write_str("None"),
            Value::Some(inner) => write!(f, "Some({inner})"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key}:{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

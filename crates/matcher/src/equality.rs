// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deep structural equality over lowered values.
//!
//! Values are compared by shape, never by identity or nominal type:
//! - Primitives by value (numbers see [`EqualityConfig::numeric_coercion`])
//! - Floats by value, with NaN equal to NaN so every value equals itself
//! - `None`, `Some(_)` and `()` only equal their own kind
//! - Sequences by length, then element-wise in order
//! - Maps and records by entries, in any order; keys compare deeply too

use crate::config::EqualityConfig;
use crate::value::Value;

/// A comparison used to decide whether a literal pattern matches a subject.
pub trait Equality: Send + Sync {
    /// Returns true if `a` and `b` are considered equal.
    fn equals(&self, a: &Value, b: &Value) -> bool;
}

impl<F> Equality for F
where
    F: Fn(&Value, &Value) -> bool + Send + Sync,
{
    fn equals(&self, a: &Value, b: &Value) -> bool {
        self(a, b)
    }
}

/// The built-in deep equality comparator.
#[derive(Debug, Clone, Default)]
pub struct DeepEqual {
    config: EqualityConfig,
}

impl DeepEqual {
    /// Deep equality with the given settings.
    pub fn new(config: EqualityConfig) -> Self {
        Self { config }
    }

    /// The settings this comparator was built with.
    pub fn config(&self) -> &EqualityConfig {
        &self.config
    }

    fn equals_at(&self, a: &Value, b: &Value, depth: usize) -> bool {
        let coerce = self.config.numeric_coercion;
        match (a, b) {
            (Value::Unit, Value::Unit) | (Value::None, Value::None) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::UInt(x), Value::UInt(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
            (Value::UInt(n), Value::Float(f)) | (Value::Float(f), Value::UInt(n)) => {
                coerce && float_equals_unsigned(*f, *n)
            }
            (Value::Int(n), Value::Float(f)) | (Value::Float(f), Value::Int(n)) => {
                coerce && float_equals_signed(*f, *n)
            }
            (Value::String(x), Value::String(y)) => x == y,
            (Value::Bytes(x), Value::Bytes(y)) => x == y,
            (Value::Some(x), Value::Some(y)) => {
                self.within_depth(depth) && self.equals_at(x, y, depth + 1)
            }
            (Value::Seq(xs), Value::Seq(ys)) => {
                self.within_depth(depth)
                    && xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys)
                        .all(|(x, y)| self.equals_at(x, y, depth + 1))
            }
            (Value::Map(xs), Value::Map(ys)) => {
                self.within_depth(depth)
                    && xs.len() == ys.len()
                    && self.entries_equal(xs, ys, depth)
            }
            _ => false,
        }
    }

    /// Pair every entry of `xs` with a distinct, equal entry of `ys`.
    fn entries_equal(&self, xs: &[(Value, Value)], ys: &[(Value, Value)], depth: usize) -> bool {
        let mut used = vec![false; ys.len()];
        xs.iter().all(|(xk, xv)| {
            let found = (0..ys.len()).find(|&i| {
                let (yk, yv) = &ys[i];
                !used[i]
                    && self.equals_at(xk, yk, depth + 1)
                    && self.equals_at(xv, yv, depth + 1)
            });
            match found {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }

    fn within_depth(&self, depth: usize) -> bool {
        if depth < self.config.max_depth {
            return true;
        }
        tracing::warn!(
            "nesting exceeds max_depth {}; treating values as unequal",
            self.config.max_depth
        );
        false
    }
}

impl Equality for DeepEqual {
    fn equals(&self, a: &Value, b: &Value) -> bool {
        self.equals_at(a, b, 0)
    }
}

/// Compare two values with the default deep equality settings.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    DeepEqual::default().equals(a, b)
}

/// An integral float in `[0, 2^128)` equal to `n`.
fn float_equals_unsigned(f: f64, n: u128) -> bool {
    f.fract() == 0.0 && (0.0..2f64.powi(128)).contains(&f) && f as u128 == n
}

/// An integral float in `[-2^127, 0)` equal to `n`.
fn float_equals_signed(f: f64, n: i128) -> bool {
    f.fract() == 0.0 && (-(2f64.powi(127))..0.0).contains(&f) && f as i128 == n
}

#[cfg(test)]
#[path = "equality_tests.rs"]
mod tests;

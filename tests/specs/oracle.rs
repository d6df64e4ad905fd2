// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the process-wide equality oracle.

use std::sync::Arc;

use crate::prelude::*;

/// > Overriding the oracle forces literal matches; resetting restores deep
/// > equality.
#[test]
fn initialize_overrides_then_resets() {
    let _lock = serial();

    oracle::initialize(Some(Arc::new(|_: &Value, _: &Value| true)));
    assert!(!oracle::is_default());
    let result = match_on(0).case(1, |_| "eq").exec().unwrap();
    assert_eq!(result, "eq");

    oracle::initialize(None);
    assert!(oracle::is_default());
    let err = match_on(0).case(1, |_| "eq").exec().unwrap_err();
    assert!(err.is_no_match());
}

#[test]
fn set_and_reset_are_shorthands() {
    let _lock = serial();

    oracle::set(|_: &Value, _: &Value| false);
    let result = match_on(1).case(1, |_| "one").exec_or("none").unwrap();
    assert_eq!(result, "none");

    oracle::reset();
    let result = match_on(1).case(1, |_| "one").exec_or("none").unwrap();
    assert_eq!(result, "one");
}

#[test]
fn override_reaches_builders_created_before_it() {
    let _lock = serial();

    let pending: MatchBuilder<'_, i32, &str> = match_on(0).case(1, |_| "forced");
    oracle::set(|_: &Value, _: &Value| true);
    assert_eq!(pending.exec().unwrap(), "forced");
}

#[test]
fn comparator_receives_subject_then_pattern() {
    let _lock = serial();

    oracle::set(|subject: &Value, pattern: &Value| {
        subject == &Value::String("subject".into()) && pattern == &Value::String("pattern".into())
    });
    let result = match_on("subject").case("pattern", |_| "ordered").exec().unwrap();
    assert_eq!(result, "ordered");
}

#[test]
fn predicates_ignore_the_oracle() {
    let _lock = serial();

    oracle::set(|_: &Value, _: &Value| true);
    let result = match_on(5)
        .case_guarded(|x| *x > 10, |_| "big")
        .default(|_| "small")
        .exec()
        .unwrap();
    assert_eq!(result, "small");
}

#[test]
fn oracle_is_read_once_per_evaluation() {
    let _lock = serial();

    let result = match_on(0)
        .case_guarded(
            |_| {
                oracle::set(|_: &Value, _: &Value| true);
                false
            },
            |_| "guard",
        )
        .case(1, |_| "forced")
        .default(|_| "default")
        .exec()
        .unwrap();
    assert_eq!(result, "default");

    // The swap made during the previous evaluation applies from now on.
    let result = match_on(0).case(1, |_| "forced").exec().unwrap();
    assert_eq!(result, "forced");
}

#[test]
fn scoped_override_restores_on_drop() {
    let _lock = serial();

    {
        let _guard = oracle::override_with(|_: &Value, _: &Value| true);
        assert!(!oracle::is_default());
        assert_eq!(match_on(0).case(1, |_| "eq").exec().unwrap(), "eq");
    }

    assert!(oracle::is_default());
    assert!(match_on(0).case(1, |_| "eq").exec().is_err());
}

#[test]
fn nested_scoped_overrides_unwind_in_order() {
    let _lock = serial();

    let (one, two) = (Value::UInt(1), Value::UInt(2));
    let outer = oracle::override_with(|_: &Value, _: &Value| true);
    {
        let _inner = oracle::override_with(|_: &Value, _: &Value| false);
        assert!(!oracle::compare(&one, &one));
    }
    assert!(oracle::compare(&one, &two));
    drop(outer);
    assert!(oracle::compare(&one, &one));
    assert!(!oracle::compare(&one, &two));
}

#[test]
fn configured_deep_equality_can_be_installed() {
    let _lock = serial();

    let strict = EqualityConfig::from_toml("numeric_coercion = false\n").unwrap();
    oracle::set(DeepEqual::new(strict));
    let result = match_on(1.0).case_like(1, |_| "int").exec_or("float").unwrap();
    assert_eq!(result, "float");

    oracle::reset();
    let result = match_on(1.0).case_like(1, |_| "int").exec_or("float").unwrap();
    assert_eq!(result, "int");
}

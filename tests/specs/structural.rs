// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for structural comparison of subjects and patterns.

use crate::prelude::*;

#[derive(Serialize)]
struct User {
    name: String,
    roles: Vec<String>,
}

#[derive(Serialize)]
struct Account {
    roles: Vec<String>,
    name: String,
}

#[derive(Serialize)]
enum Shape {
    Circle { radius: u32 },
    Square(u32),
}

fn user(name: &str, roles: &[&str]) -> User {
    User {
        name: name.to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}

/// > Records of different declared types compare by their fields.
#[test]
fn records_compare_by_fields_not_type() {
    let _lock = serial();
    let pattern = Account {
        roles: vec!["admin".to_string()],
        name: "ada".to_string(),
    };
    let result = match_on(user("ada", &["admin"]))
        .case(user("ada", &[]), |_| "no roles".to_string())
        .case_like(pattern, |u| u.name)
        .exec()
        .unwrap();
    assert_eq!(result, "ada");
}

#[test]
fn enum_variants_compare_by_serialized_shape() {
    let _lock = serial();
    let result = match_on(Shape::Circle { radius: 2 })
        .case(Shape::Square(2), |_| "square")
        .case_like(json!({"Circle": {"radius": 2}}), |_| "circle")
        .exec()
        .unwrap();
    assert_eq!(result, "circle");
}

#[test]
fn dynamic_values_match_nested_structure() {
    let _lock = serial();
    let subject = json!({"kind": "event", "payload": {"ids": [1, 2, 3], "ok": true}});
    let result = match_on(subject)
        .case(json!({"kind": "event", "payload": {"ids": [1, 2], "ok": true}}), |_| 2)
        .case(json!({"payload": {"ok": true, "ids": [1, 2, 3]}, "kind": "event"}), |_| 3)
        .exec()
        .unwrap();
    assert_eq!(result, 3);
}

#[test]
fn empty_composites_only_match_empty_subjects() {
    let _lock = serial();
    let result = match_on(json!({"a": 1}))
        .case(json!({}), |_| "empty object")
        .case(json!([]), |_| "empty array")
        .default(|_| "non-empty")
        .exec()
        .unwrap();
    assert_eq!(result, "non-empty");

    let result = match_on(json!({})).case(json!({}), |_| "empty").exec().unwrap();
    assert_eq!(result, "empty");
}

#[test]
fn integers_and_integral_floats_are_equal() {
    let _lock = serial();
    let result = match_on(2.0_f64).case_like(2_u8, |x| x * 10.0).exec().unwrap();
    assert_eq!(result, 20.0);
}

#[test]
fn none_is_not_unit_or_null() {
    let _lock = serial();
    let result = match_on(None::<i32>)
        .case(Some(0), |_| "zero")
        .case_like((), |_| "unit")
        .case_like(json!(null), |_| "null")
        .case_like(None::<String>, |_| "none")
        .exec()
        .unwrap();
    assert_eq!(result, "none");

    let result = match_on(()).case_like(json!(null), |_| "null").exec().unwrap();
    assert_eq!(result, "null");
}

#[test]
fn nested_options_are_distinct() {
    let _lock = serial();
    let result = match_on(Some(None::<i32>))
        .case(None, |_| "none")
        .case(Some(None), |_| "some-none")
        .exec()
        .unwrap();
    assert_eq!(result, "some-none");
}

#[test]
fn infinities_compare_by_sign() {
    let _lock = serial();
    let result = match_on(f64::INFINITY)
        .case(f64::NEG_INFINITY, |_| "neg")
        .case(f64::NAN, |_| "nan")
        .case(f64::INFINITY, |_| "pos")
        .exec()
        .unwrap();
    assert_eq!(result, "pos");

    let result = match_on(vec![f64::NAN]).case(vec![f64::NAN], |_| "nan").exec().unwrap();
    assert_eq!(result, "nan");
}

#[test]
fn wide_integers_compare_exactly() {
    let _lock = serial();
    let result = match_on(u128::MAX)
        .case_like(u64::MAX, |_| "u64")
        .case(u128::MAX, |_| "u128")
        .exec()
        .unwrap();
    assert_eq!(result, "u128");

    let result = match_on(i128::MIN).case_like(i128::MIN + 1, |_| "near").exec_or("none");
    assert_eq!(result.unwrap(), "none");
}

#[test]
fn maps_with_non_string_keys_compare_structurally() {
    let _lock = serial();
    let subject = BTreeMap::from([((1, 2), "a"), ((3, 4), "b")]);
    let result = match_on(subject)
        .case_like(BTreeMap::from([((2, 1), "a"), ((3, 4), "b")]), |_| 0)
        .case_like(BTreeMap::from([((3, 4), "b"), ((1, 2), "a")]), |m| m.len())
        .exec()
        .unwrap();
    assert_eq!(result, 2);
}

use super::*;
use crate::catalog::{get, pi};
use serde_json::json;

#[test]
fn new_keeps_operands_in_order() {
    let e = Expression::new("custom", crate::operands![3, "b", 1]);
    assert_eq!(e.operator(), "custom");
    assert_eq!(e.operands().len(), 3);
    assert_eq!(e.to_value(), json!(["custom", 3, "b", 1]));
}

#[test]
fn constant_has_absent_operand_list() {
    let e = Expression::constant("zoom");
    assert!(!e.has_operands());
    assert!(e.operands().is_empty());
    assert_eq!(e.to_value(), json!(["zoom"]));
}

#[test]
fn empty_and_absent_operands_serialize_alike() {
    let empty = Expression::new("all", Vec::<Operand>::new());
    assert!(empty.has_operands());
    assert_eq!(empty.to_value(), Expression::constant("all").to_value());
}

#[test]
fn unknown_operators_are_accepted() {
    let e = Expression::new("not-a-real-op", [1]);
    assert_eq!(e.known_operator(), None);
    assert_eq!(e.to_value(), json!(["not-a-real-op", 1]));
}

#[test]
fn known_operator_resolves_vocabulary() {
    assert_eq!(get("k").known_operator(), Some(Operator::Get));
    assert_eq!(Expression::from(Operator::Pi), pi());
}

#[test]
fn clones_share_the_node() {
    let a = get("k");
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&get("k")));
    assert_eq!(a, get("k"));
}

#[test]
fn shared_subexpression_appears_in_every_parent() {
    let shared = get("population");
    let left = Expression::new("+", [&shared, &shared]);
    let right = Expression::new("sqrt", [&shared]);
    let root = Expression::new("max", [left, right]);
    assert_eq!(
        root.to_value(),
        json!([
            "max",
            ["+", ["get", "population"], ["get", "population"]],
            ["sqrt", ["get", "population"]]
        ])
    );
}

#[test]
fn display_is_compact_json() {
    assert_eq!(get("k").to_string(), r#"["get","k"]"#);
}

#[test]
fn debug_names_operator() {
    assert!(format!("{:?}", get("k")).contains("\"get\""));
}

#[test]
fn expression_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
}

use super::*;
use crate::catalog::{get, sum};
use crate::operands;
use serde_json::json;

#[test]
fn let_binding() {
    assert_eq!(
        let_(["letName", "value"]).to_value(),
        json!(["let", "letName", "value"])
    );
}

#[test]
fn var_reference() {
    assert_eq!(var("letName").to_value(), json!(["var", "letName"]));
}

#[test]
fn let_with_body() {
    let e = let_(operands!["x", get("n"), sum(operands![var("x"), 1])]);
    assert_eq!(
        e.to_value(),
        json!(["let", "x", ["get", "n"], ["+", ["var", "x"], 1]])
    );
}

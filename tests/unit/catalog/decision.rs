use super::*;
use crate::catalog::{geometry_type, get, zoom};
use crate::operands;
use serde_json::json;

#[test]
fn comparisons() {
    assert_eq!(eq([1, 1]).to_value(), json!(["==", 1, 1]));
    assert_eq!(neq([0, 1]).to_value(), json!(["!=", 0, 1]));
    assert_eq!(gt([0, 1]).to_value(), json!([">", 0, 1]));
    assert_eq!(lt([1, 0]).to_value(), json!(["<", 1, 0]));
    assert_eq!(gte([1, 1]).to_value(), json!([">=", 1, 1]));
    assert_eq!(lte([1, 1]).to_value(), json!(["<=", 1, 1]));
}

#[test]
fn comparison_against_property() {
    let e = eq(operands![geometry_type(), "Point"]);
    assert_eq!(e.to_value(), json!(["==", ["geometry-type"], "Point"]));
}

#[test]
fn boolean_combinators() {
    assert_eq!(
        all([true, true, true]).to_value(),
        json!(["all", true, true, true])
    );
    assert_eq!(
        any([true, false, false]).to_value(),
        json!(["any", true, false, false])
    );
    assert_eq!(not(false).to_value(), json!(["!", false]));
}

#[test]
fn empty_combinator_serializes_bare() {
    assert_eq!(all(Vec::<bool>::new()).to_value(), json!(["all"]));
}

#[test]
fn switch_case_nests_conditions() {
    let e = switch_case([
        eq(operands![get("key1"), "value1"]),
        neq(operands![get("key2"), "value2"]),
    ]);
    assert_eq!(
        e.to_value(),
        json!([
            "case",
            ["==", ["get", "key1"], "value1"],
            ["!=", ["get", "key2"], "value2"]
        ])
    );
}

#[test]
fn match_with_label_arrays() {
    let e = match_(operands![
        get("type"),
        ["a", "b"],
        1,
        "c",
        2,
        0
    ]);
    assert_eq!(
        e.to_value(),
        json!(["match", ["get", "type"], ["a", "b"], 1, "c", 2, 0])
    );
}

#[test]
fn coalesce_keeps_order() {
    let e = coalesce(operands![get("a"), get("b"), zoom()]);
    assert_eq!(
        e.to_value(),
        json!(["coalesce", ["get", "a"], ["get", "b"], ["zoom"]])
    );
}

#[test]
fn not_list_form() {
    assert_eq!(
        not_with([crate::catalog::has("name")]).to_value(),
        json!(["!", ["has", "name"]])
    );
    assert_eq!(not_with([true, false]).to_value(), json!(["!", true, false]));
}

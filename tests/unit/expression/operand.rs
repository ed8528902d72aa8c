use super::*;
use crate::catalog::get;
use serde_json::json;

#[test]
fn scalars_convert_to_matching_variants() {
    assert_eq!(Operand::from(true), Operand::Bool(true));
    assert_eq!(Operand::from(7u8), Operand::Number(Number::from(7)));
    assert_eq!(Operand::from(-3i64), Operand::Number(Number::from(-3)));
    assert_eq!(Operand::from("k"), Operand::String("k".to_owned()));
    assert_eq!(Operand::from(String::from("k")), Operand::String("k".to_owned()));
    assert_eq!(Operand::from(Color::RED), Operand::Color(Color::RED));
}

#[test]
fn floats_keep_their_kind_and_non_finite_becomes_null() {
    assert_eq!(Operand::from(1.5).to_value(), json!(1.5));
    assert_ne!(Operand::from(1.0).to_value(), json!(1));
    assert!(Operand::from(f64::NAN).is_null());
    assert!(Operand::from(f32::INFINITY).is_null());
}

#[test]
fn json_values_map_to_opaque_variants() {
    assert_eq!(Operand::from(json!(null)), Operand::Null);
    assert_eq!(
        Operand::from(json!(["one", "two"])),
        Operand::Array(vec![json!("one"), json!("two")])
    );
    assert!(matches!(Operand::from(json!({"a": 1})), Operand::Object(_)));
}

#[test]
fn vectors_and_arrays_become_opaque_arrays() {
    assert_eq!(
        Operand::from(vec![1, 2]),
        Operand::Array(vec![json!(1), json!(2)])
    );
    assert_eq!(
        Operand::from([true, false]),
        Operand::Array(vec![json!(true), json!(false)])
    );
}

#[test]
fn options_become_null_placeholders() {
    assert_eq!(Operand::from(None::<i32>), Operand::Null);
    assert_eq!(Operand::from(Some("x")), Operand::from("x"));
}

#[test]
fn expressions_stay_expressions() {
    let g = get("k");
    let op = Operand::from(&g);
    assert!(op.is_expression());
    assert!(op.as_expression().unwrap().ptr_eq(&g));
    assert!(Operand::from(1).as_expression().is_none());
}

#[test]
fn operands_macro_packs_heterogeneous_values() {
    let ops = crate::operands![1, "a", get("k"), Color::BLUE];
    assert_eq!(ops.len(), 4);
    assert_eq!(ops[0], Operand::from(1));
    assert_eq!(ops[1], Operand::from("a"));
    assert!(ops[2].is_expression());
    assert_eq!(ops[3], Operand::Color(Color::BLUE));

    let empty = crate::operands![];
    assert!(empty.is_empty());
}

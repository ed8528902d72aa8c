use super::*;
use crate::catalog::*;
use crate::foundation::color::Color;
use serde_json::json;

#[test]
fn fingerprint_is_deterministic() {
    let build = || switch_case([eq(crate::operands![get("k"), "v"]), gt([zoom(), pi()])]);
    assert_eq!(build().fingerprint(), build().fingerprint());
    let e = build();
    assert_eq!(e.fingerprint(), e.clone().fingerprint());
}

#[test]
fn equal_wire_form_means_equal_fingerprint() {
    assert_eq!(
        to_rgba(Color::RED).fingerprint(),
        to_rgba("rgba(255, 0, 0, 1)").fingerprint()
    );
    assert_eq!(
        length(get("k")).fingerprint(),
        length(json!(["get", "k"])).fingerprint()
    );
    assert_eq!(
        Expression::constant("all").fingerprint(),
        all(Vec::<Operand>::new()).fingerprint()
    );
}

#[test]
fn different_trees_differ() {
    let a = switch_case([get("a"), get("b")]);
    let b = switch_case([get("b"), get("a")]);
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_ne!(get("a").fingerprint(), has("a").fingerprint());
    assert_ne!(eq([1, 1]).fingerprint(), eq([1.0, 1.0]).fingerprint());
    assert_ne!(literal(json!([])).fingerprint(), literal(json!({})).fingerprint());
}

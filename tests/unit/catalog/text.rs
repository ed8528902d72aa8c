use super::*;
use crate::catalog::get;
use crate::operands;
use serde_json::json;

#[test]
fn case_changes() {
    assert_eq!(upcase("string").to_value(), json!(["upcase", "string"]));
    assert_eq!(downcase("string").to_value(), json!(["downcase", "string"]));
}

#[test]
fn concat_strings() {
    assert_eq!(
        concat(["foo", "bar"]).to_value(),
        json!(["concat", "foo", "bar"])
    );
}

#[test]
fn concat_mixes_literals_and_expressions() {
    let e = concat(operands![get("name"), " (", upcase(get("ref")), ")"]);
    assert_eq!(
        e.to_value(),
        json!(["concat", ["get", "name"], " (", ["upcase", ["get", "ref"]], ")"])
    );
}

#[test]
fn case_change_list_forms() {
    assert_eq!(
        upcase_with([get("name")]).to_value(),
        json!(["upcase", ["get", "name"]])
    );
    assert_eq!(downcase_with(["ABC"]).to_value(), json!(["downcase", "ABC"]));
}

use super::*;
use std::collections::HashSet;

#[test]
fn names_round_trip_through_lookup() {
    for &op in Operator::ALL {
        assert_eq!(Operator::lookup(op.name()), Some(op), "{op:?}");
        assert_eq!(op.name().parse::<Operator>().unwrap(), op);
    }
}

#[test]
fn names_are_unique() {
    let names: HashSet<&str> = Operator::ALL.iter().map(|op| op.name()).collect();
    assert_eq!(names.len(), Operator::ALL.len());
}

#[test]
fn wire_names_follow_the_evaluator_vocabulary() {
    assert_eq!(Operator::Eq.name(), "==");
    assert_eq!(Operator::Not.name(), "!");
    assert_eq!(Operator::Case.name(), "case");
    assert_eq!(Operator::Sum.name(), "+");
    assert_eq!(Operator::Mod.name(), "%");
    assert_eq!(Operator::Pow.name(), "^");
    assert_eq!(Operator::Boolean.name(), "boolean");
    assert_eq!(Operator::ToBoolean.name(), "to-boolean");
    assert_eq!(Operator::TypeOf.name(), "typeof");
    assert_eq!(Operator::GeometryType.to_string(), "geometry-type");
}

#[test]
fn unknown_name_is_an_error() {
    assert_eq!(Operator::lookup("nope"), None);
    let err = Operator::parse("nope").unwrap_err();
    assert!(matches!(err, StyleError::UnknownOperator(ref n) if n == "nope"));
    assert_eq!(err.to_string(), "unknown operator: nope");
}

#[test]
fn constants_take_no_operands() {
    for op in [
        Operator::Pi,
        Operator::E,
        Operator::Ln2,
        Operator::Zoom,
        Operator::GeometryType,
        Operator::Id,
        Operator::HeatmapDensity,
        Operator::Properties,
    ] {
        assert_eq!(op.arity(), Arity::exactly(0), "{op}");
    }
}

#[test]
fn arity_bounds() {
    assert!(Operator::Rgb.arity().accepts(3));
    assert!(!Operator::Rgb.arity().accepts(4));
    assert!(Operator::Subtract.arity().accepts(1));
    assert!(Operator::Subtract.arity().accepts(2));
    assert!(!Operator::Subtract.arity().accepts(3));
    assert!(Operator::All.arity().accepts(0));
    assert!(Operator::Concat.arity().accepts(12));
    assert!(!Operator::Interpolate.arity().accepts(2));
}

#[test]
fn binary_math_accepts_one_or_two_operands() {
    for op in [
        Operator::Subtract,
        Operator::Division,
        Operator::Mod,
        Operator::Pow,
    ] {
        assert!(op.arity().accepts(1), "{op}");
        assert!(op.arity().accepts(2), "{op}");
        assert!(!op.arity().accepts(3), "{op}");
    }
}

#[test]
fn sum_and_product_are_variadic() {
    for op in [Operator::Sum, Operator::Product] {
        assert!(op.arity().accepts(1), "{op}");
        assert!(op.arity().accepts(9), "{op}");
    }
}

#[test]
fn match_needs_input_pair_and_fallback() {
    assert!(!Operator::Match.arity().accepts(3));
    assert!(Operator::Match.arity().accepts(4));
    assert!(Operator::Match.arity().accepts(6));
}

#[test]
fn arity_display() {
    assert_eq!(Arity::exactly(3).to_string(), "exactly 3");
    assert_eq!(Arity::between(1, 2).to_string(), "1..=2");
    assert_eq!(Arity::at_least(1).to_string(), "at least 1");
}

#[test]
fn categories_group_the_catalog() {
    assert_eq!(Operator::ToRgba.category(), Category::Color);
    assert_eq!(Operator::Coalesce.category(), Category::Decision);
    assert_eq!(Operator::Id.category(), Category::FeatureData);
    assert_eq!(Operator::HeatmapDensity.category(), Category::Heatmap);
    assert_eq!(Operator::Length.category(), Category::Lookup);
    assert_eq!(Operator::Atan.category(), Category::Math);
    assert_eq!(Operator::Concat.category(), Category::String);
    assert_eq!(Operator::Literal.category(), Category::Types);
    assert_eq!(Operator::Var.category(), Category::VariableBinding);
    assert_eq!(Operator::Zoom.category(), Category::Zoom);
    assert_eq!(Operator::CubicBezier.category(), Category::Ramps);
    assert_eq!(Category::VariableBinding.name(), "variable binding");
}

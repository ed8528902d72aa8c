//! Literals, type assertions and conversions.

use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;
use serde_json::Value;

/// `["literal", value]`: a raw array or object.
///
/// The value is stored as an opaque operand and copied to the wire as-is, even when it looks
/// like an expression (`literal(json!(["get", "k"]))` stays data).
pub fn literal(value: impl Into<Value>) -> Expression {
    fixed(Operator::Literal, [Operand::from(value.into())])
}

/// `["array", (item type), (length), value]`
pub fn array<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Array, operands)
}

/// `["typeof", value]`
pub fn type_of(value: impl Into<Operand>) -> Expression {
    fixed(Operator::TypeOf, [value.into()])
}

/// `["string", ...]`
pub fn string<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::String, operands)
}

/// `["number", ...]`
pub fn number<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Number, operands)
}

/// `["boolean", ...]`
pub fn bool<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Boolean, operands)
}

/// `["object", ...]`
pub fn object<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Object, operands)
}

/// `["to-string", ...]`
pub fn to_string<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::ToString, operands)
}

/// `["to-number", ...]`
pub fn to_number<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::ToNumber, operands)
}

/// `["to-boolean", ...]`
pub fn to_bool<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::ToBoolean, operands)
}

/// `["to-color", ...]`
pub fn to_color<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::ToColor, operands)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/types.rs"]
mod tests;

use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

/// `["at", index, array]`
pub fn at(index: impl Into<Operand>, array: impl Into<Operand>) -> Expression {
    fixed(Operator::At, [index.into(), array.into()])
}

/// `["get", key]`: property of the current feature.
pub fn get(key: impl Into<Operand>) -> Expression {
    fixed(Operator::Get, [key.into()])
}

/// `["get", key, object]`: property of an explicit object.
pub fn get_in(key: impl Into<Operand>, object: impl Into<Operand>) -> Expression {
    fixed(Operator::Get, [key.into(), object.into()])
}

/// `["has", key]`
pub fn has(key: impl Into<Operand>) -> Expression {
    fixed(Operator::Has, [key.into()])
}

/// `["has", key, object]`
pub fn has_in(key: impl Into<Operand>, object: impl Into<Operand>) -> Expression {
    fixed(Operator::Has, [key.into(), object.into()])
}

/// `["length", value]`: length of an array or string.
pub fn length(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Length, [value.into()])
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/lookup.rs"]
mod tests;

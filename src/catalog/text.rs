use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

/// `["upcase", value]`
pub fn upcase(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Upcase, [value.into()])
}

/// `["downcase", value]`
pub fn downcase(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Downcase, [value.into()])
}

list_forms! {
    upcase_with => Upcase, "upcase";
    downcase_with => Downcase, "downcase";
}

/// `["concat", ...]`
pub fn concat<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Concat, operands)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/text.rs"]
mod tests;

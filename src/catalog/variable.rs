use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

/// `["let", name, value, ..., body]`
pub fn let_<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Let, operands)
}

/// `["var", name]`
pub fn var(name: impl Into<Operand>) -> Expression {
    fixed(Operator::Var, [name.into()])
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/variable.rs"]
mod tests;

//! Comparisons, boolean combinators and branching.
//!
//! Short-circuiting and "first match wins" are evaluation-time behaviour; here every operator
//! simply keeps its operands in order.

use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

/// `["==", a, b]`
pub fn eq<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Eq, operands)
}

/// `["!=", a, b]`
pub fn neq<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Neq, operands)
}

/// `[">", a, b]`
pub fn gt<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Gt, operands)
}

/// `["<", a, b]`
pub fn lt<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Lt, operands)
}

/// `[">=", a, b]`
pub fn gte<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Gte, operands)
}

/// `["<=", a, b]`
pub fn lte<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Lte, operands)
}

/// `["all", ...]`
pub fn all<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::All, operands)
}

/// `["any", ...]`
pub fn any<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Any, operands)
}

/// `["!", value]`
pub fn not(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Not, [value.into()])
}

list_forms! {
    not_with => Not, "!";
}

/// `["case", cond, output, ..., fallback]`
pub fn switch_case<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Case, operands)
}

/// `["match", input, label, output, ..., fallback]`
///
/// A label may be a single literal or an array of literals.
pub fn match_<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Match, operands)
}

/// `["coalesce", ...]`
pub fn coalesce<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Coalesce, operands)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/decision.rs"]
mod tests;

use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

// Constants

/// `["ln2"]`
pub fn ln2() -> Expression {
    Expression::from(Operator::Ln2)
}

/// `["pi"]`
pub fn pi() -> Expression {
    Expression::from(Operator::Pi)
}

/// `["e"]`
pub fn e() -> Expression {
    Expression::from(Operator::E)
}

// Reducers

/// `["+", ...]`
pub fn sum<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Sum, operands)
}

/// `["*", ...]`
pub fn product<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Product, operands)
}

/// `["min", ...]`
pub fn min<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Min, operands)
}

/// `["max", ...]`
pub fn max<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Max, operands)
}

// Binary

/// `["-", first, second]`
pub fn subtract(first: impl Into<Operand>, second: impl Into<Operand>) -> Expression {
    fixed(Operator::Subtract, [first.into(), second.into()])
}

/// `["-", value]`: subtracts `value` from 0.
pub fn negate(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Subtract, [value.into()])
}

/// `-` with an arbitrary operand list.
pub fn subtract_with<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Subtract, operands)
}

/// `["/", first, second]`
pub fn division(first: impl Into<Operand>, second: impl Into<Operand>) -> Expression {
    fixed(Operator::Division, [first.into(), second.into()])
}

/// `["%", first, second]`
pub fn modulo(first: impl Into<Operand>, second: impl Into<Operand>) -> Expression {
    fixed(Operator::Mod, [first.into(), second.into()])
}

/// `["^", base, exponent]`
pub fn pow(base: impl Into<Operand>, exponent: impl Into<Operand>) -> Expression {
    fixed(Operator::Pow, [base.into(), exponent.into()])
}

list_forms! {
    division_with => Division, "/";
    modulo_with => Mod, "%";
    pow_with => Pow, "^";
}

// Unary

/// `["sqrt", value]`
pub fn sqrt(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Sqrt, [value.into()])
}

/// `["log10", value]`
pub fn log10(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Log10, [value.into()])
}

/// `["ln", value]`
pub fn ln(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Ln, [value.into()])
}

/// `["log2", value]`
pub fn log2(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Log2, [value.into()])
}

/// `["sin", value]`
pub fn sin(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Sin, [value.into()])
}

/// `["cos", value]`
pub fn cos(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Cos, [value.into()])
}

/// `["tan", value]`
pub fn tan(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Tan, [value.into()])
}

/// `["asin", value]`
pub fn asin(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Asin, [value.into()])
}

/// `["acos", value]`
pub fn acos(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Acos, [value.into()])
}

/// `["atan", value]`
pub fn atan(value: impl Into<Operand>) -> Expression {
    fixed(Operator::Atan, [value.into()])
}

list_forms! {
    sqrt_with => Sqrt, "sqrt";
    log10_with => Log10, "log10";
    ln_with => Ln, "ln";
    log2_with => Log2, "log2";
    sin_with => Sin, "sin";
    cos_with => Cos, "cos";
    tan_with => Tan, "tan";
    asin_with => Asin, "asin";
    acos_with => Acos, "acos";
    atan_with => Atan, "atan";
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/math.rs"]
mod tests;

//! Ramps, scales and curves.
//!
//! Stops are `[input, output]` pairs kept in the order given; ascending stop inputs are the
//! caller's responsibility.

use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

/// `["step", input, stop, ...]`
pub fn step<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Step, operands)
}

/// `["interpolate", type, input, stop, ...]`
pub fn interpolate<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Interpolate, operands)
}

/// `["linear"]` interpolation type.
pub fn linear() -> Expression {
    Expression::from(Operator::Linear)
}

/// `["exponential", base]` interpolation type.
///
/// Higher bases push the output towards the high end of the range; values near 1 are close to
/// linear.
pub fn exponential(base: impl Into<Operand>) -> Expression {
    fixed(Operator::Exponential, [base.into()])
}

/// `["cubic-bezier", x1, y1, x2, y2]` interpolation type.
pub fn cubic_bezier(
    x1: impl Into<Operand>,
    y1: impl Into<Operand>,
    x2: impl Into<Operand>,
    y2: impl Into<Operand>,
) -> Expression {
    fixed(
        Operator::CubicBezier,
        [x1.into(), y1.into(), x2.into(), y2.into()],
    )
}

/// A `[input, output]` stop, stored as an opaque array operand.
///
/// An expression output is serialized into the pair right away, so the stop itself is plain
/// data: `stop(0, rgb(0, 0, 255))` is `[0, ["rgb", 0, 0, 255]]`.
pub fn stop(input: impl Into<Operand>, output: impl Into<Operand>) -> Operand {
    let input: Operand = input.into();
    let output: Operand = output.into();
    Operand::Array(vec![input.to_value(), output.to_value()])
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/ramp.rs"]
mod tests;

use super::fixed;
use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;
use crate::foundation::color::Color;

/// `["rgb", r, g, b]`: color from components in `0..=255` with alpha 1.
///
/// Components may be numbers or expressions, e.g. `rgb(get("r"), 0, 0)`.
pub fn rgb(
    red: impl Into<Operand>,
    green: impl Into<Operand>,
    blue: impl Into<Operand>,
) -> Expression {
    fixed(Operator::Rgb, [red.into(), green.into(), blue.into()])
}

/// `rgb` with an arbitrary operand list.
pub fn rgb_with<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Rgb, operands)
}

/// `["rgba", r, g, b, a]`: color from components in `0..=255` and alpha in `0..=1`.
pub fn rgba(
    red: impl Into<Operand>,
    green: impl Into<Operand>,
    blue: impl Into<Operand>,
    alpha: impl Into<Operand>,
) -> Expression {
    fixed(
        Operator::Rgba,
        [red.into(), green.into(), blue.into(), alpha.into()],
    )
}

/// `rgba` with an arbitrary operand list.
pub fn rgba_with<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::Rgba, operands)
}

/// `["to-rgba", color]`: the `[r, g, b, a]` components of a color.
///
/// A packed [`Color`] is written as its rgba string; a string or an expression is
/// passed through.
pub fn to_rgba(color: impl Into<Operand>) -> Expression {
    fixed(Operator::ToRgba, [color.into()])
}

/// `["to-rgba", "rgba(r, g, b, a)"]` from a packed `0xAARRGGBB` integer.
///
/// Plain integers passed to [`to_rgba`] stay numbers on the wire; this is the packed-color entry
/// point.
pub fn to_rgba_argb(argb: u32) -> Expression {
    to_rgba(Color::from_argb_u32(argb))
}

/// `to-rgba` with an arbitrary operand list.
pub fn to_rgba_with<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Expression::from_operator(Operator::ToRgba, operands)
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/color.rs"]
mod tests;

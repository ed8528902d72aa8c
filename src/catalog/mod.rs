//! Operator constructors, one free function per operator.
//!
//! Variadic constructors take any iterable of operands (`all([true, false])`,
//! `switch_case([a, b])`); heterogeneous lists are easiest with [`operands!`](crate::operands).
//! Fixed-arity helpers take positional `impl Into<Operand>` arguments, so each slot accepts a
//! literal or a nested expression alike.

// Generates `<op>_with(operands)` list forms next to the typed helpers.
macro_rules! list_forms {
    ($($name:ident => $op:ident, $wire:literal;)*) => {
        $(
            #[doc = concat!("`", $wire, "` with an arbitrary operand list.")]
            pub fn $name<I>(operands: I) -> Expression
            where
                I: IntoIterator,
                I::Item: Into<Operand>,
            {
                Expression::from_operator(Operator::$op, operands)
            }
        )*
    };
}

mod color;
mod decision;
mod feature;
mod lookup;
mod math;
mod ramp;
mod text;
mod types;
mod variable;

pub use color::*;
pub use decision::*;
pub use feature::*;
pub use lookup::*;
pub use math::*;
pub use ramp::*;
pub use text::*;
pub use types::*;
pub use variable::*;

use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;

fn fixed<const N: usize>(operator: Operator, operands: [Operand; N]) -> Expression {
    Expression::from_operator(operator, operands)
}

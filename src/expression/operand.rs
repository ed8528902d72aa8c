use crate::expression::node::Expression;
use crate::foundation::color::Color;
use serde_json::{Map, Number, Value};

/// One input to an operator.
///
/// The variant decides how the serializer treats the value: expressions are recursed into,
/// colors are formatted, everything else is copied to the output untouched. [`Operand::Array`]
/// and [`Operand::Object`] are opaque: their contents are never inspected, even when they look
/// like an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Explicit `null` placeholder.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal; integer vs float kind is kept (`1` stays `1`).
    Number(Number),
    /// String literal.
    String(String),
    /// Packed ARGB color, written as an rgba string.
    Color(Color),
    /// Raw object passed through verbatim.
    Object(Map<String, Value>),
    /// Pre-built nested sequence passed through verbatim.
    Array(Vec<Value>),
    /// Nested expression, serialized recursively.
    Expression(Expression),
}

impl Operand {
    /// Return `true` for [`Operand::Expression`].
    pub fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }

    /// Borrow the nested expression, if any.
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Self::Expression(e) => Some(e),
            _ => None,
        }
    }

    /// Return `true` for [`Operand::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn from_f64(v: f64) -> Self {
        // serde_json has no representation for NaN/inf either.
        Number::from_f64(v).map_or(Self::Null, Self::Number)
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Self::Number(Number::from(v))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Self::from_f64(f64::from(v))
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

impl From<Number> for Operand {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Operand {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl From<Color> for Operand {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Expression> for Operand {
    fn from(v: Expression) -> Self {
        Self::Expression(v)
    }
}

impl From<&Expression> for Operand {
    fn from(v: &Expression) -> Self {
        Self::Expression(v.clone())
    }
}

impl From<Map<String, Value>> for Operand {
    fn from(v: Map<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items),
            Value::Object(map) => Self::Object(map),
        }
    }
}

impl<T> From<Vec<T>> for Operand
where
    T: Into<Value>,
{
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Operand
where
    T: Into<Value>,
{
    fn from(v: [T; N]) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Operand
where
    T: Into<Operand>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Build a `Vec<Operand>` from heterogeneous values.
///
/// ```
/// use style_expr::prelude::*;
///
/// let e = eq(operands![get("kind"), "park"]);
/// assert_eq!(e.to_json().unwrap(), r#"["==",["get","kind"],"park"]"#);
/// ```
#[macro_export]
macro_rules! operands {
    () => {
        ::std::vec::Vec::<$crate::Operand>::new()
    };
    ($($x:expr),+ $(,)?) => {
        ::std::vec![$($crate::Operand::from($x)),+]
    };
}

#[cfg(test)]
#[path = "../../tests/unit/expression/operand.rs"]
mod tests;

//! Wire serialization.
//!
//! The wire form of a node is a JSON array: the operator name followed by every operand in order.
//! Nested expressions become nested arrays, packed colors become rgba strings and every other
//! operand is copied verbatim. Opaque arrays and objects are never re-inspected.

use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::foundation::error::StyleResult;
use serde_json::Value;

impl Expression {
    /// Serialize into the wire sequence `[operator, operand...]`.
    ///
    /// Pure and deterministic: calling it twice on the same tree yields equal output.
    pub fn to_array(&self) -> Vec<Value> {
        let operands = self.operands();
        let mut out = Vec::with_capacity(operands.len() + 1);
        out.push(Value::String(self.operator().to_owned()));
        out.extend(operands.iter().map(Operand::to_value));
        out
    }

    /// [`Expression::to_array`] wrapped in a [`Value::Array`].
    pub fn to_value(&self) -> Value {
        Value::Array(self.to_array())
    }

    /// Compact JSON text of the wire form.
    pub fn to_json(&self) -> StyleResult<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    /// Indented JSON text of the wire form.
    pub fn to_json_pretty(&self) -> StyleResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

impl Operand {
    /// Wire value of a single operand.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Color(c) => Value::String(c.to_rgba_string()),
            Self::Object(map) => Value::Object(map.clone()),
            Self::Array(items) => Value::Array(items.clone()),
            Self::Expression(e) => e.to_value(),
        }
    }
}

impl From<&Expression> for Value {
    fn from(e: &Expression) -> Self {
        e.to_value()
    }
}

impl From<Expression> for Value {
    fn from(e: Expression) -> Self {
        e.to_value()
    }
}

impl serde::Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

impl serde::Serialize for Operand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/serialize.rs"]
mod tests;

use crate::expression::operand::Operand;
use crate::expression::operator::Operator;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Immutable expression tree node: an operator name and its ordered operands.
///
/// Cloning is cheap and shares the node, so one sub-expression can be used as an operand of
/// several parents (and across threads). Nodes only ever reference already-built nodes, which
/// keeps every tree acyclic.
///
/// Nothing is validated here. Unknown operators and wrong operand counts are carried through to
/// the wire form unchanged; see [`Expression::validate`] for an explicit strict check.
#[derive(Clone, PartialEq)]
pub struct Expression {
    node: Arc<Node>,
}

#[derive(Debug, PartialEq)]
struct Node {
    operator: Cow<'static, str>,
    operands: Option<Vec<Operand>>, // None for fixed no-argument operators
}

impl Expression {
    /// Build a node from an operator name and operands, kept in the given order.
    pub fn new<I>(operator: impl Into<Cow<'static, str>>, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Self {
            node: Arc::new(Node {
                operator: operator.into(),
                operands: Some(operands.into_iter().map(Into::into).collect()),
            }),
        }
    }

    /// Build a node whose operand list is absent (`pi`, `zoom`, `properties`, ...).
    pub fn constant(operator: impl Into<Cow<'static, str>>) -> Self {
        Self {
            node: Arc::new(Node {
                operator: operator.into(),
                operands: None,
            }),
        }
    }

    /// Same as [`Expression::new`] with a name from the known vocabulary.
    pub fn from_operator<I>(operator: Operator, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Self::new(operator.name(), operands)
    }

    /// Operator name as written on the wire.
    pub fn operator(&self) -> &str {
        &self.node.operator
    }

    /// Look the operator name up in the known vocabulary.
    pub fn known_operator(&self) -> Option<Operator> {
        Operator::lookup(self.operator())
    }

    /// Operands in order; empty when the operand list is absent.
    pub fn operands(&self) -> &[Operand] {
        self.node.operands.as_deref().unwrap_or(&[])
    }

    /// `false` for nodes built with [`Expression::constant`].
    pub fn has_operands(&self) -> bool {
        self.node.operands.is_some()
    }

    /// Return `true` when both handles point at the same shared node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl From<Operator> for Expression {
    fn from(operator: Operator) -> Self {
        Self::constant(operator.name())
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("operator", &self.node.operator)
            .field("operands", &self.node.operands)
            .finish()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/node.rs"]
mod tests;

//! Opt-in strict validation against the documented operator arities.
//!
//! Nothing in the builder calls this implicitly; the wire form is identical whether or not a tree
//! validates.

use crate::expression::node::Expression;
use crate::expression::operand::Operand;
use crate::expression::operator::Operator;
use crate::foundation::error::{StyleError, StyleResult};
use std::fmt;

/// Strict validation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidateOpts {
    /// Accept operator names outside the known vocabulary (their arity is not checked).
    pub allow_unknown_operators: bool,
    /// Maximum nesting depth, the root being depth 1. `None` means unlimited.
    pub max_depth: Option<usize>,
}

/// One problem found by strict validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Positions in the wire form leading to the offending node (`[2, 1]` is `$[2][1]`).
    pub path: Vec<usize>,
    /// What is wrong.
    pub message: String,
}

impl ValidationIssue {
    fn at(path: &[usize], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[usize]) -> String {
    let mut s = String::from("$");
    for i in path {
        s.push('[');
        s.push_str(&i.to_string());
        s.push(']');
    }
    s
}

impl Expression {
    /// Strictly validate with [`ValidateOpts::default`].
    pub fn validate(&self) -> StyleResult<()> {
        self.validate_with(&ValidateOpts::default())
    }

    /// Strictly validate, reporting every issue in one [`StyleError::Validation`].
    #[tracing::instrument(skip_all, fields(operator = %self.operator()))]
    pub fn validate_with(&self, opts: &ValidateOpts) -> StyleResult<()> {
        let issues = self.validation_issues(opts);
        if issues.is_empty() {
            tracing::debug!("expression is valid");
            return Ok(());
        }

        tracing::debug!(issues = issues.len(), "expression failed strict validation");
        let msg = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Err(StyleError::validation(msg))
    }

    /// Collect every issue in depth-first order without failing.
    pub fn validation_issues(&self, opts: &ValidateOpts) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        walk(self, &mut Vec::new(), 1, opts, &mut issues);
        issues
    }
}

fn walk(
    expr: &Expression,
    path: &mut Vec<usize>,
    depth: usize,
    opts: &ValidateOpts,
    issues: &mut Vec<ValidationIssue>,
) {
    if let Some(max) = opts.max_depth
        && depth > max
    {
        issues.push(ValidationIssue::at(
            path,
            format!("nesting depth exceeds {max}"),
        ));
        return;
    }

    let count = expr.operands().len();
    match Operator::lookup(expr.operator()) {
        Some(op) => {
            let arity = op.arity();
            if !arity.accepts(count) {
                issues.push(ValidationIssue::at(
                    path,
                    format!("\"{op}\" expects {arity} operand(s), got {count}"),
                ));
            }
        }
        None if opts.allow_unknown_operators => {}
        None => issues.push(ValidationIssue::at(
            path,
            format!("unknown operator \"{}\"", expr.operator()),
        )),
    }

    for (i, operand) in expr.operands().iter().enumerate() {
        if let Operand::Expression(child) = operand {
            // Offset by one: position 0 of the wire array is the operator name.
            path.push(i + 1);
            walk(child, path, depth + 1, opts, issues);
            path.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/validate.rs"]
mod tests;

//! `style-expr` builds data-driven styling expressions and serializes them to the canonical
//! nested-array JSON form consumed by map style evaluators.
//!
//! # Overview
//!
//! 1. **Build**: compose [`Expression`] nodes with the constructors in [`catalog`] (or
//!    [`prelude`]). Nodes are immutable and cheap to clone, so sub-expressions can be shared.
//! 2. **Serialize**: [`Expression::to_value`], [`Expression::to_json`] or any `serde` serializer
//!    produce `["operator", operand, ...]` with nested expressions as nested arrays.
//! 3. **Check** (optional): [`Expression::validate`] compares operand counts against the
//!    documented arity of each [`Operator`].
//!
//! Building and serializing never fail and never validate: arity, operand types, stop order and
//! color ranges are the evaluator's business.
//!
//! ```
//! use style_expr::prelude::*;
//!
//! let e = switch_case([
//!     eq(operands![get("k1"), "v1"]),
//!     neq(operands![get("k2"), "v2"]),
//! ]);
//! assert_eq!(
//!     e.to_json().unwrap(),
//!     r#"["case",["==",["get","k1"],"v1"],["!=",["get","k2"],"v2"]]"#
//! );
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod expression;
mod foundation;

/// Operator constructors grouped by category.
pub mod catalog;

pub use crate::expression::fingerprint::ExprFingerprint;
pub use crate::expression::node::Expression;
pub use crate::expression::operand::Operand;
pub use crate::expression::operator::{Arity, Category, Operator};
pub use crate::expression::validate::{ValidateOpts, ValidationIssue};
pub use crate::foundation::color::Color;
pub use crate::foundation::error::{StyleError, StyleResult};

/// Everything needed to build expressions: the catalog, core types and [`operands!`].
pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::operands;
    pub use crate::{Color, Expression, Operand, Operator};
}

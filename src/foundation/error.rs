/// Convenience result type used across the crate.
pub type StyleResult<T> = Result<T, StyleError>;

/// Error taxonomy for the few operations that can fail.
///
/// Building and serializing expressions never fails; errors only come from opt-in strict
/// validation, name lookups, color parsing and JSON text rendering.
#[derive(thiserror::Error, Debug)]
pub enum StyleError {
    /// Strict validation found one or more malformed nodes.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operator name that is not part of the known vocabulary.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// A color string that could not be parsed.
    #[error("color error: {0}")]
    Color(String),

    /// Errors when rendering the wire value as JSON text.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StyleError {
    /// Build a [`StyleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StyleError::UnknownOperator`] value.
    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::UnknownOperator(name.into())
    }

    /// Build a [`StyleError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`StyleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// required fields, invariants). Host concerns (persistence, UI) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed snapshot input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A field the document cannot be committed without is empty.
    ///
    /// `Display` is exactly the user-facing message so hosts can surface it as-is.
    #[error("{message}")]
    MissingRequiredField {
        field: &'static str,
        message: String,
    },

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field,
            message: message.into(),
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Message to show an end user when this error blocks a save.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Name of the offending field, for errors tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { field, .. } => Some(field),
            _ => None,
        }
    }
}

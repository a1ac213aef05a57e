//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// `InvalidCommand`, `PreconditionViolation` and `UnknownCommand` are contract
/// violations by the caller: they are returned immediately and never retried.
/// The remaining variants cover malformed values at the domain boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A command was missing its required payload or carried an unusable one.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A command targeted state that does not exist (e.g. an absent cart line).
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// The command kind is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A value failed validation (e.g. malformed price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank SKU).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }

    pub fn unknown_command(kind: impl Into<String>) -> Self {
        Self::UnknownCommand(kind.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether the error signals a defect in the calling code (as opposed to bad input data).
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCommand(_) | Self::PreconditionViolation(_) | Self::UnknownCommand(_)
        )
    }
}

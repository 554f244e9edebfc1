//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// Every failed operation leaves the entity unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("dollar value of {coins} coins exceeds the decimal range")]
    ValueOverflow { coins: i32 },
}

impl DomainError {
    /// Create an invalid-argument error with a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

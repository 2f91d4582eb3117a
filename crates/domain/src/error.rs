//! Unified error types for the domain layer
//!
//! Provides a common error type for record validation so adapters do not have
//! to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A record inside a collection failed validation
    #[error("{collection}[{index}]: {message}")]
    InvalidRecord {
        collection: &'static str,
        index: usize,
        message: String,
    },
}

impl DomainError {
    /// Creates a validation error for violated field constraints.
    ///
    /// # Example
    /// ```ignore
    /// if count == 0 {
    ///     return Err(DomainError::validation("count must be at least 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Attach the collection and position of the offending record.
    pub fn in_record(self, collection: &'static str, index: usize) -> Self {
        let message = match self {
            Self::Validation(msg) => msg,
            Self::InvalidRecord { message, .. } => message,
        };
        Self::InvalidRecord {
            collection,
            index,
            message,
        }
    }
}

//! Unified error types for the domain layer
//!
//! Provides a common error type for value-object construction, so adapters
//! don't have to fall back to String or anyhow.
//!
//! Result validation does NOT use this type: rule violations accumulate in
//! [`crate::validation::ResultErrors`] instead of aborting.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for value objects that cannot be built.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Player name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

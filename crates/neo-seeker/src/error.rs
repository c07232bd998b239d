//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building or evaluating criteria.
///
/// There is exactly one kind: a criterion names a field (or carries no field
/// at all) that has no attribute accessor. It signals a programming or
/// configuration mistake, never bad record data or bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekerError {
    /// No attribute accessor exists for the given name.
    #[error("unsupported criterion: '{name}'")]
    UnsupportedCriterion { name: String },
}

impl SeekerError {
    pub(crate) fn unsupported(name: impl Into<String>) -> Self {
        SeekerError::UnsupportedCriterion { name: name.into() }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;

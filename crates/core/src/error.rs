//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (missing records,
/// illegal state, malformed input). Storage faults that cannot be classified
/// map to `Internal` and are never swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced entity (order, item, user, inventory, tax rate) does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation is invalid given current state (insufficient inventory,
    /// illegal status transition, missing singleton record to update).
    #[error("illegal state: {0}")]
    State(String),

    /// Malformed input (tax rate out of range, non-positive price, empty item map).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness or singleton invariant was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The caller lacks the required role or ownership for the action.
    #[error("access denied")]
    AccessDenied,

    /// Unclassified internal failure (e.g. a storage fault).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

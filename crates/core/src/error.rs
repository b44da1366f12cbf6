//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures
/// (validation, access, uniqueness). Every failure is terminal for the
/// triggering operation; nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input, out-of-range age).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced record is absent, or present but hidden from the actor.
    #[error("not found")]
    NotFound,

    /// A uniqueness rule rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A role or ownership gate refused the action.
    #[error("forbidden")]
    Forbidden,

    /// The actor's role does not cover the attempted action class.
    #[error("role not permitted for this action")]
    RoleNotPermitted,

    /// Volunteer account awaiting administrative approval.
    ///
    /// A distinguished subtype of [`DomainError::Forbidden`], kept
    /// separate so callers can message it clearly.
    #[error("account is pending approval")]
    PendingApproval,

    /// Identity resolution failed (credential absent or malformed).
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// The persistence backend failed (lock poisoned, connection lost).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_credential(msg: impl Into<String>) -> Self {
        Self::InvalidCredential(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only, and in this domain those are all
/// validation rejections (draft fields, date ranges). Display-path helpers
/// (money, dates) deliberately never produce these; they degrade to safe
/// defaults instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Failure reported by an external collaborator (catalog listing, pricing,
/// sale persistence).
///
/// The transport is assumed reliable at the "resolves or rejects" level;
/// this is the reject channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The collaborator could not be reached or did not answer.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered with a refusal (e.g. insufficient stock
    /// detected server-side at submission time).
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl ServiceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}

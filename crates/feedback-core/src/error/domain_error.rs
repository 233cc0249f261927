//! Domain-level errors shared by all layers

use thiserror::Error;

/// Errors raised by domain operations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Feedback not found: {0}")]
    FeedbackNotFound(i64),

    #[error("Vote not found: {0}")]
    VoteNotFound(i64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid vote value: {0} (expected 1 or -1)")]
    InvalidVoteValue(i32),

    #[error("Only the feedback owner may perform this action")]
    NotFeedbackOwner,

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::FeedbackNotFound(_) => "FEEDBACK_NOT_FOUND",
            Self::VoteNotFound(_) => "VOTE_NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidVoteValue(_) => "INVALID_VOTE_VALUE",
            Self::NotFeedbackOwner => "NOT_FEEDBACK_OWNER",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error maps to a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::FeedbackNotFound(_) | Self::VoteNotFound(_)
        )
    }

    /// Whether this error maps to invalid client input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidVoteValue(_))
    }

    /// Whether this error maps to a denied action
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotFeedbackOwner)
    }

    /// Whether this error maps to a state conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists)
    }
}

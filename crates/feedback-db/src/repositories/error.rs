//! Error handling utilities for repositories

use feedback_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "feedback not found" error
pub fn feedback_not_found(id: i64) -> DomainError {
    DomainError::FeedbackNotFound(id)
}

/// Create a "vote not found" error
pub fn vote_not_found(id: i64) -> DomainError {
    DomainError::VoteNotFound(id)
}

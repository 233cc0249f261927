//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Create feedback request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackRequest {
    #[validate(length(min = 5, max = 100, message = "Title must be 5-100 characters"))]
    pub title: String,

    #[validate(length(min = 20, max = 1000, message = "Description must be 20-1000 characters"))]
    pub description: String,
}

/// Query parameters for listing feedback
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFeedbacksQuery {
    /// Case-insensitive substring filter on title or description
    pub search: Option<String>,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Cast vote request. `is_upvote` must be 1 (upvote) or -1 (downvote);
/// the exact-value check lives in the service, which reports
/// INVALID_VOTE_VALUE.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CastVoteRequest {
    pub is_upvote: i32,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddReactionRequest {
    #[validate(length(min = 1, max = 2, message = "Emoji must be a single emoji"))]
    pub emoji: String,
}

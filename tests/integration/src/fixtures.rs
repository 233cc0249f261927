//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
}

/// Create feedback request
#[derive(Debug, Serialize)]
pub struct CreateFeedbackRequest {
    pub title: String,
    pub description: String,
}

impl CreateFeedbackRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test feedback {suffix}"),
            description: format!("A longer description of test feedback item {suffix}."),
        }
    }
}

/// Feedback response
#[derive(Debug, Deserialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: String,
    pub upvotes: i64,
    pub downvotes: i64,
    #[serde(default)]
    pub user_vote: Option<i32>,
    pub author: String,
    pub comments: Vec<CommentResponse>,
    pub reactions: Vec<ReactionCountResponse>,
}

/// Vote request
#[derive(Debug, Serialize)]
pub struct CastVoteRequest {
    pub is_upvote: i32,
}

/// Vote response
#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub is_upvote: i32,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub feedback_id: i64,
    pub user_id: i64,
    pub author: String,
    pub created_at: String,
}

/// Add reaction request
#[derive(Debug, Serialize)]
pub struct AddReactionRequest {
    pub emoji: String,
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: String,
}

/// Aggregated reaction count
#[derive(Debug, Deserialize)]
pub struct ReactionCountResponse {
    pub emoji: String,
    pub count: i64,
    pub user_reacted: bool,
}

/// Share links response
#[derive(Debug, Deserialize)]
pub struct ShareLinksResponse {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! IDs are plain numbers matching the database identifiers.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
}

// ============================================================================
// Feedback Responses
// ============================================================================

/// Feedback item with its derived view data: vote tallies, the
/// viewer's own vote, author name, comments, and reaction counts.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub upvotes: i64,
    pub downvotes: i64,
    /// The viewer's vote (1 or -1), absent when anonymous or not voted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<i32>,
    pub author: String,
    pub comments: Vec<CommentResponse>,
    pub reactions: Vec<ReactionCountResponse>,
}

/// Social share links for a feedback item
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinksResponse {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

// ============================================================================
// Vote Responses
// ============================================================================

/// A single vote record
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoteResponse {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub is_upvote: i32,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A single comment with its author's name
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub feedback_id: i64,
    pub user_id: i64,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// A single reaction record
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregated reaction count for one emoji
#[derive(Debug, Clone, Serialize)]
pub struct ReactionCountResponse {
    pub emoji: String,
    pub count: i64,
    pub user_reacted: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

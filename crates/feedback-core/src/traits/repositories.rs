//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Comment, Feedback, NewComment, NewFeedback, NewReaction, NewVote, Reaction, ReactionCount,
    User, Vote, VoteCounts,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user, returning the stored record
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;
}

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Find feedback by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feedback>>;

    /// List all feedback, newest first, optionally filtered by a
    /// case-insensitive substring match on title or description
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Feedback>>;

    /// Create a new feedback item, returning the stored record
    async fn create(&self, feedback: NewFeedback) -> RepoResult<Feedback>;

    /// Delete a feedback item and its dependent rows
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the vote a user has cast on a feedback item, if any
    async fn find_by_feedback_and_user(
        &self,
        feedback_id: i64,
        user_id: i64,
    ) -> RepoResult<Option<Vote>>;

    /// Create a new vote, returning the stored record
    async fn create(&self, vote: NewVote) -> RepoResult<Vote>;

    /// Change the direction of an existing vote
    async fn update(&self, id: i64, is_upvote: i32) -> RepoResult<Vote>;

    /// Count upvotes and downvotes for a feedback item
    async fn counts(&self, feedback_id: i64) -> RepoResult<VoteCounts>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment, returning the stored record
    async fn create(&self, comment: NewComment) -> RepoResult<Comment>;

    /// List comments for a feedback item, newest first
    async fn find_by_feedback(&self, feedback_id: i64) -> RepoResult<Vec<Comment>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Add a reaction, replacing any existing reaction by the same
    /// user with the same emoji on the same feedback item
    async fn create(&self, reaction: NewReaction) -> RepoResult<Reaction>;

    /// Remove a reaction
    async fn delete(&self, feedback_id: i64, user_id: i64, emoji: &str) -> RepoResult<()>;

    /// Aggregate reactions for a feedback item by emoji. When `viewer`
    /// is set, each row reports whether that user reacted.
    async fn aggregate(
        &self,
        feedback_id: i64,
        viewer: Option<i64>,
    ) -> RepoResult<Vec<ReactionCount>>;
}

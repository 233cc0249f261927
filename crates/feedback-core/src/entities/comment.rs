//! Comment entity - a comment on a feedback item

use chrono::{DateTime, Utc};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub feedback_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a comment; id and timestamp are assigned
/// by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub feedback_id: i64,
    pub user_id: i64,
}

impl NewComment {
    /// Create a new NewComment
    pub fn new(content: String, feedback_id: i64, user_id: i64) -> Self {
        Self {
            content,
            feedback_id,
            user_id,
        }
    }
}

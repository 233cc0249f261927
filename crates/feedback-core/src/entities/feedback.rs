//! Feedback entity - a user-submitted title/description pair

use chrono::{DateTime, Utc};

/// Feedback item entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Check whether the given user owns this feedback item
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Data required to insert a feedback item; id and timestamp are
/// assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

impl NewFeedback {
    /// Create a new NewFeedback
    pub fn new(title: String, description: String, user_id: i64) -> Self {
        Self {
            title,
            description,
            user_id,
        }
    }
}

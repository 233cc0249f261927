//! Reaction entity - an emoji reaction on a feedback item

use chrono::{DateTime, Utc};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// Data required to insert a reaction; id and timestamp are assigned
/// by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub feedback_id: i64,
    pub user_id: i64,
    pub emoji: String,
}

impl NewReaction {
    /// Create a new NewReaction
    pub fn new(feedback_id: i64, user_id: i64, emoji: String) -> Self {
        Self {
            feedback_id,
            user_id,
            emoji,
        }
    }
}

/// Aggregated reaction count for one emoji on one feedback item,
/// including whether the requesting user contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: i64,
    pub user_reacted: bool,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji: String, count: i64, user_reacted: bool) -> Self {
        Self {
            emoji,
            count,
            user_reacted,
        }
    }
}

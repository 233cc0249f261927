//! Reaction database models

use chrono::{DateTime, Utc};
use feedback_core::entities::{Reaction, ReactionCount};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            feedback_id: model.feedback_id,
            user_id: model.user_id,
            emoji: model.emoji,
            created_at: model.created_at,
        }
    }
}

/// Aggregated reaction count row (per emoji)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionAggregateModel {
    pub emoji: String,
    pub count: i64,
    pub user_reacted: bool,
}

impl From<ReactionAggregateModel> for ReactionCount {
    fn from(model: ReactionAggregateModel) -> Self {
        ReactionCount {
            emoji: model.emoji,
            count: model.count,
            user_reacted: model.user_reacted,
        }
    }
}

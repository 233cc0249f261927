//! Vote database models

use feedback_core::entities::{Vote, VoteCounts};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub is_upvote: i32,
}

impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: model.id,
            feedback_id: model.feedback_id,
            user_id: model.user_id,
            is_upvote: model.is_upvote,
        }
    }
}

/// Aggregated vote counts row
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VoteCountsModel {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl From<VoteCountsModel> for VoteCounts {
    fn from(model: VoteCountsModel) -> Self {
        VoteCounts {
            upvotes: model.upvotes,
            downvotes: model.downvotes,
        }
    }
}

//! Comment database model

use chrono::{DateTime, Utc};
use feedback_core::entities::Comment;
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub content: String,
    pub feedback_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            feedback_id: model.feedback_id,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}

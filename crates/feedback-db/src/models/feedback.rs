//! Feedback database model

use chrono::{DateTime, Utc};
use feedback_core::entities::Feedback;
use sqlx::FromRow;

/// Database model for feedbacks table
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackModel> for Feedback {
    fn from(model: FeedbackModel) -> Self {
        Feedback {
            id: model.id,
            title: model.title,
            description: model.description,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}

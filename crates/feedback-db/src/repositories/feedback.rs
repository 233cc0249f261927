//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feedback_core::entities::{Feedback, NewFeedback};
use feedback_core::traits::{FeedbackRepository, RepoResult};

use crate::models::FeedbackModel;

use super::error::{feedback_not_found, map_db_error};

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    /// Create a new PgFeedbackRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Feedback>> {
        let result = sqlx::query_as::<_, FeedbackModel>(
            r"
            SELECT id, title, description, user_id, created_at
            FROM feedbacks
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Feedback::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, search: Option<&str>) -> RepoResult<Vec<Feedback>> {
        let results = match search {
            Some(term) if !term.is_empty() => {
                sqlx::query_as::<_, FeedbackModel>(
                    r"
                    SELECT id, title, description, user_id, created_at
                    FROM feedbacks
                    WHERE title ILIKE '%' || $1 || '%'
                       OR description ILIKE '%' || $1 || '%'
                    ORDER BY created_at DESC
                    ",
                )
                .bind(term)
                .fetch_all(&self.pool)
                .await
            }
            _ => {
                sqlx::query_as::<_, FeedbackModel>(
                    r"
                    SELECT id, title, description, user_id, created_at
                    FROM feedbacks
                    ORDER BY created_at DESC
                    ",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Feedback::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, feedback: NewFeedback) -> RepoResult<Feedback> {
        let result = sqlx::query_as::<_, FeedbackModel>(
            r"
            INSERT INTO feedbacks (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, user_id, created_at
            ",
        )
        .bind(&feedback.title)
        .bind(&feedback.description)
        .bind(feedback.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Feedback::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Dependent votes, comments, and reactions are removed by
        // ON DELETE CASCADE.
        let result = sqlx::query(
            r"
            DELETE FROM feedbacks WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(feedback_not_found(id));
        }

        Ok(())
    }
}

//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feedback_core::entities::{Comment, NewComment};
use feedback_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn create(&self, comment: NewComment) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (content, feedback_id, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, feedback_id, user_id, created_at
            ",
        )
        .bind(&comment.content)
        .bind(comment.feedback_id)
        .bind(comment.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_feedback(&self, feedback_id: i64) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, feedback_id, user_id, created_at
            FROM comments
            WHERE feedback_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(feedback_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}

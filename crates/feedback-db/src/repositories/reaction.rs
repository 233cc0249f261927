//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feedback_core::entities::{NewReaction, Reaction, ReactionCount};
use feedback_core::traits::{ReactionRepository, RepoResult};

use crate::models::{ReactionAggregateModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn create(&self, reaction: NewReaction) -> RepoResult<Reaction> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Replace any prior reaction by the same user with the same
        // emoji so repeated requests never inflate the count.
        sqlx::query(
            r"
            DELETE FROM reactions
            WHERE feedback_id = $1 AND user_id = $2 AND emoji = $3
            ",
        )
        .bind(reaction.feedback_id)
        .bind(reaction.user_id)
        .bind(&reaction.emoji)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query_as::<_, ReactionModel>(
            r"
            INSERT INTO reactions (feedback_id, user_id, emoji)
            VALUES ($1, $2, $3)
            RETURNING id, feedback_id, user_id, emoji, created_at
            ",
        )
        .bind(reaction.feedback_id)
        .bind(reaction.user_id)
        .bind(&reaction.emoji)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Reaction::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, feedback_id: i64, user_id: i64, emoji: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM reactions
            WHERE feedback_id = $1 AND user_id = $2 AND emoji = $3
            ",
        )
        .bind(feedback_id)
        .bind(user_id)
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn aggregate(
        &self,
        feedback_id: i64,
        viewer: Option<i64>,
    ) -> RepoResult<Vec<ReactionCount>> {
        // An anonymous viewer passes 0, which never matches a real
        // user id, so user_reacted comes back false on every row.
        let viewer_id = viewer.unwrap_or(0);

        let results = sqlx::query_as::<_, ReactionAggregateModel>(
            r"
            SELECT emoji,
                   COUNT(*) AS count,
                   BOOL_OR(user_id = $2) AS user_reacted
            FROM reactions
            WHERE feedback_id = $1
            GROUP BY emoji
            ORDER BY count DESC
            ",
        )
        .bind(feedback_id)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReactionCount::from).collect())
    }
}

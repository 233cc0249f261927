//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feedback_core::entities::{NewVote, Vote, VoteCounts};
use feedback_core::traits::{RepoResult, VoteRepository};

use crate::models::{VoteCountsModel, VoteModel};

use super::error::{map_db_error, vote_not_found};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find_by_feedback_and_user(
        &self,
        feedback_id: i64,
        user_id: i64,
    ) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT id, feedback_id, user_id, is_upvote
            FROM votes
            WHERE feedback_id = $1 AND user_id = $2
            ",
        )
        .bind(feedback_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, vote: NewVote) -> RepoResult<Vote> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            INSERT INTO votes (feedback_id, user_id, is_upvote)
            VALUES ($1, $2, $3)
            RETURNING id, feedback_id, user_id, is_upvote
            ",
        )
        .bind(vote.feedback_id)
        .bind(vote.user_id)
        .bind(vote.is_upvote)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Vote::from(result))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, is_upvote: i32) -> RepoResult<Vote> {
        let result = sqlx::query_as::<_, VoteModel>(
            r"
            UPDATE votes
            SET is_upvote = $2
            WHERE id = $1
            RETURNING id, feedback_id, user_id, is_upvote
            ",
        )
        .bind(id)
        .bind(is_upvote)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::from).ok_or_else(|| vote_not_found(id))
    }

    #[instrument(skip(self))]
    async fn counts(&self, feedback_id: i64) -> RepoResult<VoteCounts> {
        let result = sqlx::query_as::<_, VoteCountsModel>(
            r"
            SELECT COUNT(*) FILTER (WHERE is_upvote = 1) AS upvotes,
                   COUNT(*) FILTER (WHERE is_upvote = -1) AS downvotes
            FROM votes
            WHERE feedback_id = $1
            ",
        )
        .bind(feedback_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(VoteCounts::from(result))
    }
}

//! Vote service
//!
//! Casting a vote either creates a new vote row or flips the user's
//! existing vote for that feedback item.

use feedback_core::entities::{is_valid_vote_value, NewVote};
use feedback_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CastVoteRequest, VoteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Outcome of casting a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastVoteOutcome {
    /// A new vote row was created
    Created,
    /// An existing vote row was updated
    Updated,
}

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast a vote on a feedback item
    ///
    /// A user holds at most one vote per feedback item; voting again
    /// replaces the previous direction.
    #[instrument(skip(self))]
    pub async fn cast(
        &self,
        feedback_id: i64,
        user_id: i64,
        request: CastVoteRequest,
    ) -> ServiceResult<(CastVoteOutcome, VoteResponse)> {
        if !is_valid_vote_value(request.is_upvote) {
            return Err(DomainError::InvalidVoteValue(request.is_upvote).into());
        }

        // Voting on a missing feedback item is a 404, not a broken FK.
        self.ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?;

        let existing = self
            .ctx
            .vote_repo()
            .find_by_feedback_and_user(feedback_id, user_id)
            .await?;

        let (outcome, vote) = match existing {
            Some(vote) => {
                let updated = self
                    .ctx
                    .vote_repo()
                    .update(vote.id, request.is_upvote)
                    .await?;
                (CastVoteOutcome::Updated, updated)
            }
            None => {
                let created = self
                    .ctx
                    .vote_repo()
                    .create(NewVote::new(feedback_id, user_id, request.is_upvote))
                    .await?;
                (CastVoteOutcome::Created, created)
            }
        };

        info!(
            feedback_id = feedback_id,
            is_upvote = vote.is_upvote,
            "Vote cast"
        );

        Ok((
            outcome,
            VoteResponse {
                id: vote.id,
                feedback_id: vote.feedback_id,
                user_id: vote.user_id,
                is_upvote: vote.is_upvote,
            },
        ))
    }
}

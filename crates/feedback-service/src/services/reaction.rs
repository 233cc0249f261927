//! Reaction service

use feedback_core::entities::NewReaction;
use feedback_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{AddReactionRequest, ReactionCountResponse, ReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add an emoji reaction to a feedback item
    ///
    /// Repeating the same reaction replaces the earlier row, so the
    /// aggregate count never grows past one per user per emoji.
    #[instrument(skip(self, request), fields(emoji = %request.emoji))]
    pub async fn add(
        &self,
        feedback_id: i64,
        user_id: i64,
        request: AddReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        self.ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?;

        let reaction = self
            .ctx
            .reaction_repo()
            .create(NewReaction::new(feedback_id, user_id, request.emoji))
            .await?;

        info!(feedback_id = feedback_id, "Reaction added");

        Ok(ReactionResponse {
            id: reaction.id,
            feedback_id: reaction.feedback_id,
            user_id: reaction.user_id,
            emoji: reaction.emoji,
            created_at: reaction.created_at,
        })
    }

    /// Remove a user's reaction from a feedback item
    #[instrument(skip(self))]
    pub async fn remove(&self, feedback_id: i64, user_id: i64, emoji: &str) -> ServiceResult<()> {
        self.ctx
            .reaction_repo()
            .delete(feedback_id, user_id, emoji)
            .await?;

        info!(feedback_id = feedback_id, "Reaction removed");
        Ok(())
    }

    /// Aggregate reactions for a feedback item by emoji
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        feedback_id: i64,
        viewer: Option<i64>,
    ) -> ServiceResult<Vec<ReactionCountResponse>> {
        let counts = self
            .ctx
            .reaction_repo()
            .aggregate(feedback_id, viewer)
            .await?;

        Ok(counts
            .into_iter()
            .map(|r| ReactionCountResponse {
                emoji: r.emoji,
                count: r.count,
                user_reacted: r.user_reacted,
            })
            .collect())
    }
}

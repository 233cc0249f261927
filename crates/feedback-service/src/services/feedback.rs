//! Feedback service
//!
//! Handles creating, listing, fetching, deleting, and sharing feedback items.

use feedback_core::entities::{Feedback, NewFeedback};
use feedback_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CreateFeedbackRequest, FeedbackResponse, ReactionCountResponse,
    ShareLinksResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Author name shown when the owning user record is missing
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all feedback, newest first, optionally filtered by search term
    ///
    /// `viewer` is the authenticated user if any; it drives the
    /// `user_vote` and `user_reacted` fields.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        search: Option<&str>,
        viewer: Option<i64>,
    ) -> ServiceResult<Vec<FeedbackResponse>> {
        let feedbacks = self.ctx.feedback_repo().list(search).await?;

        let mut responses = Vec::with_capacity(feedbacks.len());
        for feedback in feedbacks {
            responses.push(self.compose_view(feedback, viewer).await?);
        }

        Ok(responses)
    }

    /// Get a single feedback item with its derived view
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64, viewer: Option<i64>) -> ServiceResult<FeedbackResponse> {
        let feedback = self
            .ctx
            .feedback_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(id))?;

        self.compose_view(feedback, viewer).await
    }

    /// Create a new feedback item owned by `user_id`
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        user_id: i64,
        request: CreateFeedbackRequest,
    ) -> ServiceResult<FeedbackResponse> {
        let feedback = self
            .ctx
            .feedback_repo()
            .create(NewFeedback::new(request.title, request.description, user_id))
            .await?;

        info!(feedback_id = feedback.id, "Feedback created");

        self.compose_view(feedback, Some(user_id)).await
    }

    /// Delete a feedback item; only the owner may do this
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64, user_id: i64) -> ServiceResult<()> {
        let feedback = self
            .ctx
            .feedback_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(id))?;

        if !feedback.is_owned_by(user_id) {
            return Err(ServiceError::from(DomainError::NotFeedbackOwner));
        }

        self.ctx.feedback_repo().delete(id).await?;

        info!(feedback_id = id, "Feedback deleted");
        Ok(())
    }

    /// Build social share links for a feedback item
    #[instrument(skip(self))]
    pub async fn share_links(
        &self,
        id: i64,
        public_url: &str,
    ) -> ServiceResult<ShareLinksResponse> {
        let feedback = self
            .ctx
            .feedback_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(id))?;

        let base = public_url.trim_end_matches('/');
        let share_url = format!("{base}/feedback/{id}");

        let text = format!("{}\n\n{}", feedback.title, feedback.description);
        let encoded_text = urlencoding::encode(&text);
        let encoded_url = urlencoding::encode(&share_url);

        Ok(ShareLinksResponse {
            twitter: format!(
                "https://twitter.com/intent/tweet?text={encoded_text}&url={encoded_url}"
            ),
            linkedin: format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={encoded_url}"
            ),
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}"),
        })
    }

    /// Assemble the full response view for one feedback item: vote
    /// tallies, the viewer's vote, author name, comments, and reactions.
    pub(crate) async fn compose_view(
        &self,
        feedback: Feedback,
        viewer: Option<i64>,
    ) -> ServiceResult<FeedbackResponse> {
        let counts = self.ctx.vote_repo().counts(feedback.id).await?;

        let user_vote = match viewer {
            Some(user_id) => self
                .ctx
                .vote_repo()
                .find_by_feedback_and_user(feedback.id, user_id)
                .await?
                .map(|v| v.is_upvote),
            None => None,
        };

        let author = self.author_name(feedback.user_id).await?;

        let comments = self.ctx.comment_repo().find_by_feedback(feedback.id).await?;
        let mut comment_responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = self.author_name(comment.user_id).await?;
            comment_responses.push(CommentResponse {
                id: comment.id,
                content: comment.content,
                feedback_id: comment.feedback_id,
                user_id: comment.user_id,
                author,
                created_at: comment.created_at,
            });
        }

        let reactions = self
            .ctx
            .reaction_repo()
            .aggregate(feedback.id, viewer)
            .await?
            .into_iter()
            .map(|r| ReactionCountResponse {
                emoji: r.emoji,
                count: r.count,
                user_reacted: r.user_reacted,
            })
            .collect();

        Ok(FeedbackResponse {
            id: feedback.id,
            title: feedback.title,
            description: feedback.description,
            user_id: feedback.user_id,
            created_at: feedback.created_at,
            upvotes: counts.upvotes,
            downvotes: counts.downvotes,
            user_vote,
            author,
            comments: comment_responses,
            reactions,
        })
    }

    /// Resolve a user id to a display name, falling back when missing
    async fn author_name(&self, user_id: i64) -> ServiceResult<String> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map_or_else(|| UNKNOWN_AUTHOR.to_string(), |u| u.username))
    }
}

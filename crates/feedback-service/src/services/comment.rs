//! Comment service

use feedback_core::entities::NewComment;
use feedback_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a feedback item
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        feedback_id: i64,
        user_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?;

        let comment = self
            .ctx
            .comment_repo()
            .create(NewComment::new(request.content, feedback_id, user_id))
            .await?;

        info!(comment_id = comment.id, feedback_id = feedback_id, "Comment created");

        let author = self.author_name(comment.user_id).await?;

        Ok(CommentResponse {
            id: comment.id,
            content: comment.content,
            feedback_id: comment.feedback_id,
            user_id: comment.user_id,
            author,
            created_at: comment.created_at,
        })
    }

    /// List comments for a feedback item, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, feedback_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .feedback_repo()
            .find_by_id(feedback_id)
            .await?
            .ok_or(DomainError::FeedbackNotFound(feedback_id))?;

        let comments = self.ctx.comment_repo().find_by_feedback(feedback_id).await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = self.author_name(comment.user_id).await?;
            responses.push(CommentResponse {
                id: comment.id,
                content: comment.content,
                feedback_id: comment.feedback_id,
                user_id: comment.user_id,
                author,
                created_at: comment.created_at,
            });
        }

        Ok(responses)
    }

    async fn author_name(&self, user_id: i64) -> ServiceResult<String> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .map_or_else(|| "Unknown".to_string(), |u| u.username))
    }
}

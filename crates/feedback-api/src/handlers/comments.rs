//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use feedback_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Add a comment to a feedback item
///
/// POST /feedbacks/{feedback_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(feedback_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create(feedback_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List comments for a feedback item, newest first
///
/// GET /feedbacks/{feedback_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(feedback_id): Path<i64>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list(feedback_id).await?;
    Ok(Json(response))
}

//! Feedback handlers
//!
//! Endpoints for creating, listing, fetching, deleting, and sharing
//! feedback items.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use feedback_service::{
    CreateFeedbackRequest, FeedbackResponse, FeedbackService, ListFeedbacksQuery,
    ShareLinksResponse,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List feedback items, newest first, optionally filtered by search term
///
/// GET /feedbacks?search=term
pub async fn list_feedbacks(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(query): Query<ListFeedbacksQuery>,
) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service
        .list(query.search.as_deref(), viewer.user_id())
        .await?;
    Ok(Json(response))
}

/// Get a single feedback item
///
/// GET /feedbacks/{feedback_id}
pub async fn get_feedback(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(feedback_id): Path<i64>,
) -> ApiResult<Json<FeedbackResponse>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.get(feedback_id, viewer.user_id()).await?;
    Ok(Json(response))
}

/// Create a new feedback item
///
/// POST /feedbacks
pub async fn create_feedback(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFeedbackRequest>,
) -> ApiResult<Created<Json<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a feedback item (owner only)
///
/// DELETE /feedbacks/{feedback_id}
pub async fn delete_feedback(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(feedback_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = FeedbackService::new(state.service_context());
    service.delete(feedback_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Get social share links for a feedback item
///
/// GET /feedbacks/{feedback_id}/share
pub async fn share_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<i64>,
) -> ApiResult<Json<ShareLinksResponse>> {
    let service = FeedbackService::new(state.service_context());
    let response = service
        .share_links(feedback_id, &state.config().app.public_url)
        .await?;
    Ok(Json(response))
}

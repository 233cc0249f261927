//! Reaction handlers
//!
//! Endpoints for emoji reactions on feedback items.

use axum::{
    extract::{Path, State},
    Json,
};
use feedback_service::{
    AddReactionRequest, ReactionCountResponse, ReactionResponse, ReactionService,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add an emoji reaction to a feedback item
///
/// POST /feedbacks/{feedback_id}/reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(feedback_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<AddReactionRequest>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let service = ReactionService::new(state.service_context());
    let response = service.add(feedback_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Remove the caller's reaction with the given emoji
///
/// DELETE /feedbacks/{feedback_id}/reactions/{emoji}
pub async fn remove_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((feedback_id, emoji)): Path<(i64, String)>,
) -> ApiResult<NoContent> {
    let service = ReactionService::new(state.service_context());
    service.remove(feedback_id, auth.user_id, &emoji).await?;
    Ok(NoContent)
}

/// Aggregate reactions for a feedback item by emoji
///
/// GET /feedbacks/{feedback_id}/reactions
pub async fn list_reactions(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(feedback_id): Path<i64>,
) -> ApiResult<Json<Vec<ReactionCountResponse>>> {
    let service = ReactionService::new(state.service_context());
    let response = service.list(feedback_id, viewer.user_id()).await?;
    Ok(Json(response))
}

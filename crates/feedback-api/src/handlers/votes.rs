//! Vote handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feedback_service::{CastVoteOutcome, CastVoteRequest, VoteService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Cast or flip a vote on a feedback item
///
/// POST /feedbacks/{feedback_id}/vote
///
/// Returns 201 when a new vote was recorded and 200 when an existing
/// vote was updated.
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(feedback_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Response> {
    let service = VoteService::new(state.service_context());
    let (outcome, vote) = service.cast(feedback_id, auth.user_id, request).await?;

    let status = match outcome {
        CastVoteOutcome::Created => StatusCode::CREATED,
        CastVoteOutcome::Updated => StatusCode::OK,
    };

    Ok((status, Json(vote)).into_response())
}

//! User handlers
//!
//! Endpoints for the authenticated user's profile.

use axum::{extract::State, Json};
use feedback_service::{AuthService, CurrentUserResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(&auth.session_token).await?;
    Ok(Json(response))
}

//! Authentication handlers
//!
//! Endpoints for user registration, login, and logout. Successful
//! register and login set the session cookie; logout clears it.

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use feedback_service::{AuthService, CurrentUserResponse, LoginRequest, RegisterRequest};

use crate::extractors::{removal_cookie, session_cookie, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<Json<CurrentUserResponse>>)> {
    let service = AuthService::new(state.service_context());
    let (token, user) = service.register(request).await?;
    let jar = jar.add(session_cookie(token));
    Ok((jar, Created(Json(user))))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<CurrentUserResponse>)> {
    let service = AuthService::new(state.service_context());
    let (token, user) = service.login(request).await?;
    let jar = jar.add(session_cookie(token));
    Ok((jar, Json(user)))
}

/// Logout user
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, NoContent)> {
    let service = AuthService::new(state.service_context());
    service.logout(&auth.session_token).await?;
    let jar = jar.remove(removal_cookie());
    Ok((jar, NoContent))
}

//! Session authentication extractors
//!
//! Resolves the session cookie against the Redis session store and
//! exposes the authenticated user id to handlers.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use feedback_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "feedback_session";

/// Build the session cookie set on register and login
///
/// The cookie is a bare session id; expiry is enforced server-side by
/// the Redis TTL, so no Max-Age is set.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Build the removal cookie used on logout
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .build()
}

/// Authenticated user extractor
///
/// Rejects with 401 when the session cookie is missing or does not
/// resolve to a live session.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user's id
    pub user_id: i64,
    /// The raw session token, kept so logout can revoke it
    pub session_token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(ApiError::MissingAuth)?;

        let service = AuthService::new(state.service_context());
        let user_id = service
            .resolve_session(&token)
            .await
            .map_err(|_| ApiError::InvalidSession)?;

        Ok(AuthUser {
            user_id,
            session_token: token,
        })
    }
}

/// Optional authenticated user extractor
///
/// Resolves to `None` for anonymous requests; a stale or invalid cookie
/// is treated as anonymous rather than rejected, so public listings
/// keep working after a session expires.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    /// The viewer's user id, if authenticated
    pub fn user_id(&self) -> Option<i64> {
        self.0.as_ref().map(|auth| auth.user_id)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match AuthUser::from_request_parts(parts, state).await {
            Ok(auth) => Ok(OptionalAuthUser(Some(auth))),
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc123");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_removal_cookie() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_optional_auth_user_id() {
        let anonymous = OptionalAuthUser(None);
        assert_eq!(anonymous.user_id(), None);

        let authed = OptionalAuthUser(Some(AuthUser {
            user_id: 7,
            session_token: "token".to_string(),
        }));
        assert_eq!(authed.user_id(), Some(7));
    }
}

//! Authentication service
//!
//! Handles user registration, login, session lookup, and logout.

use feedback_cache::SessionData;
use feedback_common::auth::{generate_session_token, hash_password, verify_password};
use tracing::{info, instrument, warn};

use crate::dto::{CurrentUserResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and open a session for them
    ///
    /// Returns the session token alongside the created user.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> ServiceResult<(String, CurrentUserResponse)> {
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::conflict("Username already exists"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // The repository maps a concurrent duplicate insert to
        // UsernameAlreadyExists via the unique constraint.
        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &password_hash)
            .await?;

        info!(user_id = user.id, "User registered successfully");

        let token = self.open_session(user.id).await?;

        Ok((
            token,
            CurrentUserResponse {
                id: user.id,
                username: user.username,
            },
        ))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> ServiceResult<(String, CurrentUserResponse)> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(feedback_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(feedback_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(
                feedback_common::AppError::InvalidCredentials,
            ));
        }

        info!(user_id = user.id, "User logged in successfully");

        let token = self.open_session(user.id).await?;

        Ok((
            token,
            CurrentUserResponse {
                id: user.id,
                username: user.username,
            },
        ))
    }

    /// Logout by revoking the session token
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        self.ctx
            .session_store()
            .revoke(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!("Session revoked");
        Ok(())
    }

    /// Resolve a session token to the current user
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> ServiceResult<CurrentUserResponse> {
        let session = self.touch_session(token).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", session.user_id.to_string()))?;

        Ok(CurrentUserResponse {
            id: user.id,
            username: user.username,
        })
    }

    /// Resolve a session token to a user id (for extractors)
    #[instrument(skip(self, token))]
    pub async fn resolve_session(&self, token: &str) -> ServiceResult<i64> {
        let session = self.touch_session(token).await?;

        Ok(session.user_id)
    }

    /// Look up a session and slide its expiry, so sessions time out on
    /// inactivity rather than a fixed window from login
    async fn touch_session(&self, token: &str) -> ServiceResult<SessionData> {
        let session = self
            .ctx
            .session_store()
            .get(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(
                feedback_common::AppError::InvalidSession,
            ))?;

        self.ctx
            .session_store()
            .refresh(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(session)
    }

    /// Create and store a new session for a user
    async fn open_session(&self, user_id: i64) -> ServiceResult<String> {
        let token = generate_session_token();
        let data = SessionData::new(user_id);

        self.ctx
            .session_store()
            .store(&token, &data)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(token)
    }
}

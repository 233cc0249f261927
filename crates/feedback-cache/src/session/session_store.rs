//! Session storage in Redis.
//!
//! Sessions map an opaque token to the authenticated user, with
//! automatic expiration.

use crate::pool::{RedisPool, RedisResult};
use serde::{Deserialize, Serialize};

/// Key prefix for sessions
const SESSION_PREFIX: &str = "session:";

/// Default TTL for sessions (7 days)
const DEFAULT_SESSION_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionData {
    /// Create new session data for a user
    #[must_use]
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Session store for managing authentication sessions
#[derive(Clone)]
pub struct SessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl SessionStore {
    /// Create a new session store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a session token
    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    /// Store a session
    pub async fn store(&self, token: &str, data: &SessionData) -> RedisResult<()> {
        let key = Self::key(token);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        tracing::debug!(user_id = data.user_id, "Stored session");

        Ok(())
    }

    /// Get session data for a token (returns None if expired or unknown)
    pub async fn get(&self, token: &str) -> RedisResult<Option<SessionData>> {
        let key = Self::key(token);
        self.pool.get_value(&key).await
    }

    /// Revoke (delete) a session
    pub async fn revoke(&self, token: &str) -> RedisResult<bool> {
        let key = Self::key(token);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!("Revoked session");
        }

        Ok(deleted)
    }

    /// Slide a session's expiry out to the full TTL again
    ///
    /// Called on every successful session resolution, so sessions
    /// expire after `ttl_seconds` of inactivity rather than a fixed
    /// window from login.
    pub async fn refresh(&self, token: &str) -> RedisResult<bool> {
        let key = Self::key(token);
        self.pool.expire(&key, self.ttl_seconds).await
    }
}

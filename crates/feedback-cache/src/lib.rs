//! # feedback-cache
//!
//! Redis caching layer for session storage.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Opaque session tokens with automatic expiration
//!
//! ## Example
//!
//! ```ignore
//! use feedback_cache::{RedisPool, RedisPoolConfig, SessionData, SessionStore};
//!
//! // Create Redis pool
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! // Create session store
//! let sessions = SessionStore::new(pool);
//!
//! // Store a session
//! let data = SessionData::new(user_id);
//! sessions.store(&token, &data).await?;
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{SessionData, SessionStore};

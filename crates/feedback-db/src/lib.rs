//! # feedback-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `feedback-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feedback_db::pool::{create_pool, DatabaseConfig};
//! use feedback_db::repositories::PgFeedbackRepository;
//! use feedback_core::traits::FeedbackRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let feedback_repo = PgFeedbackRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgFeedbackRepository, PgReactionRepository, PgUserRepository,
    PgVoteRepository,
};

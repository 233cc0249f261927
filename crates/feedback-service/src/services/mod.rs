//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod feedback;
pub mod reaction;
pub mod vote;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use reaction::ReactionService;
pub use vote::{CastVoteOutcome, VoteService};

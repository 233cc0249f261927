//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feedback-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod feedback;
mod reaction;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use feedback::PgFeedbackRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;

//! # feedback-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Feedback, NewComment, NewFeedback, NewReaction, NewVote, Reaction, ReactionCount,
    User, Vote, VoteCounts,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, FeedbackRepository, ReactionRepository, RepoResult, UserRepository,
    VoteRepository,
};

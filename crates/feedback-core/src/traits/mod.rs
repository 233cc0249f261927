//! Repository trait definitions

mod repositories;

pub use repositories::{
    CommentRepository, FeedbackRepository, ReactionRepository, RepoResult, UserRepository,
    VoteRepository,
};

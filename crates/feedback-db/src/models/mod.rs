//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Each model derives `FromRow` and carries a `From<Model>` conversion
//! into the corresponding `feedback-core` entity.

mod comment;
mod feedback;
mod reaction;
mod user;
mod vote;

pub use comment::CommentModel;
pub use feedback::FeedbackModel;
pub use reaction::{ReactionAggregateModel, ReactionModel};
pub use user::UserModel;
pub use vote::{VoteCountsModel, VoteModel};

//! Domain entities for the feedback board

mod comment;
mod feedback;
mod reaction;
mod user;
mod vote;

pub use comment::{Comment, NewComment};
pub use feedback::{Feedback, NewFeedback};
pub use reaction::{NewReaction, Reaction, ReactionCount};
pub use user::User;
pub use vote::{is_valid_vote_value, NewVote, Vote, VoteCounts, DOWNVOTE, UPVOTE};

//! Vote entity - a user's up/down vote on a feedback item

/// Vote value for an upvote
pub const UPVOTE: i32 = 1;

/// Vote value for a downvote
pub const DOWNVOTE: i32 = -1;

/// Vote entity. `is_upvote` is 1 for an upvote and -1 for a downvote,
/// matching the persisted representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub feedback_id: i64,
    pub user_id: i64,
    pub is_upvote: i32,
}

impl Vote {
    /// Check if this vote is an upvote
    #[inline]
    pub fn is_up(&self) -> bool {
        self.is_upvote == UPVOTE
    }
}

/// Data required to insert a vote; id is assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewVote {
    pub feedback_id: i64,
    pub user_id: i64,
    pub is_upvote: i32,
}

impl NewVote {
    /// Create a new NewVote
    pub fn new(feedback_id: i64, user_id: i64, is_upvote: i32) -> Self {
        Self {
            feedback_id,
            user_id,
            is_upvote,
        }
    }
}

/// Check whether a raw vote value is one of the two accepted values
#[inline]
pub fn is_valid_vote_value(value: i32) -> bool {
    value == UPVOTE || value == DOWNVOTE
}

/// Aggregated vote counts for a feedback item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteCounts {
    /// Create a new VoteCounts
    pub fn new(upvotes: i64, downvotes: i64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Net score (upvotes minus downvotes)
    #[inline]
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

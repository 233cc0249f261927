//! User entity - represents a registered account

/// User entity. The password hash never travels with the entity;
/// it stays behind the repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

impl User {
    /// Create a new User
    pub fn new(id: i64, username: String) -> Self {
        Self { id, username }
    }
}

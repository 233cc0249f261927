//! Authentication utilities

mod password;
mod session_token;

pub use password::{hash_password, verify_password, PasswordService};
pub use session_token::generate_session_token;

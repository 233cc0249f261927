//! Axum extractors for request handling
//!
//! Custom extractors for session authentication and validation.

mod auth;
mod validated;

pub use auth::{removal_cookie, session_cookie, AuthUser, OptionalAuthUser, SESSION_COOKIE};
pub use validated::ValidatedJson;

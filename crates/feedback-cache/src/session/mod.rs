//! Session storage module.
//!
//! Provides Redis-backed storage for opaque session tokens.

mod session_store;

pub use session_store::{SessionData, SessionStore};

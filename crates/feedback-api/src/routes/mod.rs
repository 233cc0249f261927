//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, comments, feedbacks, health, reactions, users, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(feedback_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

/// Feedback routes
fn feedback_routes() -> Router<AppState> {
    Router::new()
        // Feedback CRUD
        .route("/feedbacks", get(feedbacks::list_feedbacks))
        .route("/feedbacks", post(feedbacks::create_feedback))
        .route("/feedbacks/:feedback_id", get(feedbacks::get_feedback))
        .route("/feedbacks/:feedback_id", delete(feedbacks::delete_feedback))
        // Share links
        .route("/feedbacks/:feedback_id/share", get(feedbacks::share_feedback))
        // Votes
        .route("/feedbacks/:feedback_id/vote", post(votes::cast_vote))
        // Comments
        .route("/feedbacks/:feedback_id/comments", get(comments::list_comments))
        .route("/feedbacks/:feedback_id/comments", post(comments::create_comment))
        // Reactions
        .route("/feedbacks/:feedback_id/reactions", get(reactions::list_reactions))
        .route("/feedbacks/:feedback_id/reactions", post(reactions::add_reaction))
        .route(
            "/feedbacks/:feedback_id/reactions/:emoji",
            delete(reactions::remove_reaction),
        )
}

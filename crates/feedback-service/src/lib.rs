//! # feedback-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AddReactionRequest, CastVoteRequest, CommentResponse, CreateCommentRequest,
    CreateFeedbackRequest, CurrentUserResponse, FeedbackResponse, HealthResponse,
    ListFeedbacksQuery, LoginRequest, ReactionCountResponse, ReactionResponse, ReadinessResponse,
    RegisterRequest, ShareLinksResponse, VoteResponse,
};
pub use services::{
    AuthService, CastVoteOutcome, CommentService, FeedbackService, ReactionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, VoteService,
};

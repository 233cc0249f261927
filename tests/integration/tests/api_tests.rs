//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.session_client().unwrap();
    let request = RegisterRequest::unique();

    let response = server
        .post_with(&client, "/api/v1/auth/register", &request)
        .await
        .unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);

    // The register response sets the session cookie
    let response = server.get_with(&client, "/api/v1/users/@me").await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, user.id);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same username
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_short_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest {
        username: "ab".to_string(),
        password: "TestPass123!".to_string(),
    };

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Login with a fresh session
    let client = server.session_client().unwrap();
    let login_req = LoginRequest::from_register(&register_req);
    let response = server
        .post_with(&client, "/api/v1/auth/login", &login_req)
        .await
        .unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.username, register_req.username);

    let response = server.get_with(&client, "/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        username: "nonexistentuser".to_string(),
        password: "wrongpass1".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_user_requires_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.session_client().unwrap();

    let register_req = RegisterRequest::unique();
    server
        .post_with(&client, "/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    let response = server
        .post_empty_with(&client, "/api/v1/auth/logout")
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The session is gone server-side even if a stale cookie were replayed
    let response = server.get_with(&client, "/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_session_survives_repeated_requests() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.session_client().unwrap();

    let register_req = RegisterRequest::unique();
    server
        .post_with(&client, "/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    // Every resolution slides the session expiry; the session must
    // stay valid across consecutive authenticated requests
    for _ in 0..3 {
        let response = server.get_with(&client, "/api/v1/users/@me").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

// ============================================================================
// Feedback Tests
// ============================================================================

/// Register a fresh user and return their cookie-holding client
async fn register_user(server: &TestServer) -> (reqwest::Client, CurrentUserResponse) {
    let client = server.session_client().unwrap();
    let request = RegisterRequest::unique();
    let response = server
        .post_with(&client, "/api/v1/auth/register", &request)
        .await
        .unwrap();
    let user: CurrentUserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (client, user)
}

/// Create a feedback item as the given client
async fn create_feedback(server: &TestServer, client: &reqwest::Client) -> FeedbackResponse {
    let request = CreateFeedbackRequest::unique();
    let response = server
        .post_with(client, "/api/v1/feedbacks", &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_create_feedback() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, user) = register_user(&server).await;

    let request = CreateFeedbackRequest::unique();
    let response = server
        .post_with(&client, "/api/v1/feedbacks", &request)
        .await
        .unwrap();
    let feedback: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(feedback.title, request.title);
    assert_eq!(feedback.description, request.description);
    assert_eq!(feedback.user_id, user.id);
    assert_eq!(feedback.author, user.username);
    assert_eq!(feedback.upvotes, 0);
    assert_eq!(feedback.downvotes, 0);
    assert!(feedback.comments.is_empty());
    assert!(feedback.reactions.is_empty());
}

#[tokio::test]
async fn test_create_feedback_requires_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateFeedbackRequest::unique();

    let response = server.post("/api/v1/feedbacks", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_feedback_short_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;

    let request = CreateFeedbackRequest {
        title: "Hey".to_string(),
        description: "A description that is certainly long enough to pass.".to_string(),
    };
    let response = server
        .post_with(&client, "/api/v1/feedbacks", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_list_and_search_feedbacks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;

    // A single-token title keeps the search query URL-safe
    let marker = format!("searchable{}", unique_suffix());
    let request = CreateFeedbackRequest {
        title: marker.clone(),
        description: "A description that is certainly long enough to pass.".to_string(),
    };
    let response = server
        .post_with(&client, "/api/v1/feedbacks", &request)
        .await
        .unwrap();
    let created: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Anonymous listing includes the new item
    let response = server.get("/api/v1/feedbacks").await.unwrap();
    let items: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.iter().any(|f| f.id == created.id));

    // Search matches on title
    let response = server
        .get(&format!("/api/v1/feedbacks?search={marker}"))
        .await
        .unwrap();
    let items: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.iter().any(|f| f.id == created.id));

    // Search that matches nothing
    let response = server
        .get("/api/v1/feedbacks?search=zzz-no-such-feedback-zzz")
        .await
        .unwrap();
    let items: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_get_feedback_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/feedbacks/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_feedback_owner_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner, _) = register_user(&server).await;
    let (intruder, _) = register_user(&server).await;
    let feedback = create_feedback(&server, &owner).await;
    let path = format!("/api/v1/feedbacks/{}", feedback.id);

    // A different user cannot delete it
    let response = server.delete_with(&intruder, &path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can
    let response = server.delete_with(&owner, &path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // And the item is gone
    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_cast_and_flip_vote() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;
    let path = format!("/api/v1/feedbacks/{}/vote", feedback.id);

    // First vote creates a row
    let response = server
        .post_with(&client, &path, &CastVoteRequest { is_upvote: 1 })
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(vote.is_upvote, 1);

    // Voting again flips the existing vote
    let response = server
        .post_with(&client, &path, &CastVoteRequest { is_upvote: -1 })
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(vote.is_upvote, -1);

    // Counts and the viewer's own vote reflect the flip
    let response = server
        .get_with(&client, &format!("/api/v1/feedbacks/{}", feedback.id))
        .await
        .unwrap();
    let feedback: FeedbackResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feedback.upvotes, 0);
    assert_eq!(feedback.downvotes, 1);
    assert_eq!(feedback.user_vote, Some(-1));
}

#[tokio::test]
async fn test_vote_counts_across_users() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (first_voter, _) = register_user(&server).await;
    let (second_voter, _) = register_user(&server).await;
    let feedback = create_feedback(&server, &first_voter).await;
    let vote_path = format!("/api/v1/feedbacks/{}/vote", feedback.id);
    let item_path = format!("/api/v1/feedbacks/{}", feedback.id);

    let response = server
        .post_with(&first_voter, &vote_path, &CastVoteRequest { is_upvote: 1 })
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_with(&second_voter, &vote_path, &CastVoteRequest { is_upvote: -1 })
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Tallies equal the vote rows per direction
    let response = server.get(&item_path).await.unwrap();
    let item: FeedbackResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(item.upvotes, 1);
    assert_eq!(item.downvotes, 1);

    // The second voter flipping moves their row between tallies
    let response = server
        .post_with(&second_voter, &vote_path, &CastVoteRequest { is_upvote: 1 })
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&item_path).await.unwrap();
    let item: FeedbackResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(item.upvotes, 2);
    assert_eq!(item.downvotes, 0);
}

#[tokio::test]
async fn test_vote_invalid_value() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;

    let response = server
        .post_with(
            &client,
            &format!("/api/v1/feedbacks/{}/vote", feedback.id),
            &CastVoteRequest { is_upvote: 3 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_vote_malformed_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;

    // A type-mismatched body goes through the same 400 path as the
    // other mutating routes
    let body = serde_json::json!({ "is_upvote": "up" });
    let response = server
        .post_with(
            &client,
            &format!("/api/v1/feedbacks/{}/vote", feedback.id),
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_vote_missing_feedback() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;

    let response = server
        .post_with(
            &client,
            "/api/v1/feedbacks/999999999/vote",
            &CastVoteRequest { is_upvote: 1 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_comments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;
    let path = format!("/api/v1/feedbacks/{}/comments", feedback.id);

    let response = server
        .post_with(
            &client,
            &path,
            &CreateCommentRequest {
                content: "First comment".to_string(),
            },
        )
        .await
        .unwrap();
    let first: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(first.content, "First comment");
    assert_eq!(first.author, user.username);

    let response = server
        .post_with(
            &client,
            &path,
            &CreateCommentRequest {
                content: "Second comment".to_string(),
            },
        )
        .await
        .unwrap();
    let second: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Anonymous listing, newest first
    let response = server.get(&path).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, second.id);
    assert_eq!(comments[1].id, first.id);
}

#[tokio::test]
async fn test_comment_empty_content() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;

    let response = server
        .post_with(
            &client,
            &format!("/api/v1/feedbacks/{}/comments", feedback.id),
            &CreateCommentRequest {
                content: String::new(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reactions_idempotent_per_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;
    let path = format!("/api/v1/feedbacks/{}/reactions", feedback.id);
    let request = AddReactionRequest {
        emoji: "🔥".to_string(),
    };

    // React twice with the same emoji
    let response = server.post_with(&client, &path, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server.post_with(&client, &path, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The aggregate still counts one reaction for this user
    let response = server.get_with(&client, &path).await.unwrap();
    let counts: Vec<ReactionCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].emoji, "🔥");
    assert_eq!(counts[0].count, 1);
    assert!(counts[0].user_reacted);

    // Anonymous viewers see the count but no ownership flag
    let response = server.get(&path).await.unwrap();
    let counts: Vec<ReactionCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts[0].count, 1);
    assert!(!counts[0].user_reacted);
}

#[tokio::test]
async fn test_remove_reaction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;
    let path = format!("/api/v1/feedbacks/{}/reactions", feedback.id);

    let response = server
        .post_with(
            &client,
            &path,
            &AddReactionRequest {
                emoji: "👍".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_with(&client, &format!("{path}/👍"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_with(&client, &path).await.unwrap();
    let counts: Vec<ReactionCountResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(counts.is_empty());
}

// ============================================================================
// Share Link Tests
// ============================================================================

#[tokio::test]
async fn test_share_links() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (client, _user) = register_user(&server).await;
    let feedback = create_feedback(&server, &client).await;

    let response = server
        .get(&format!("/api/v1/feedbacks/{}/share", feedback.id))
        .await
        .unwrap();
    let links: ShareLinksResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let expected_path = format!("feedback%2F{}", feedback.id);
    // The share text carries the percent-encoded title (spaces -> %20)
    let encoded_title = feedback.title.replace(' ', "%20");
    assert!(links.twitter.starts_with("https://twitter.com/intent/tweet?text="));
    assert!(links.twitter.contains(&encoded_title));
    assert!(!links.twitter.contains(&feedback.title));
    assert!(links.twitter.contains(&expected_path));
    assert!(links
        .linkedin
        .starts_with("https://www.linkedin.com/sharing/share-offsite/?url="));
    assert!(links.linkedin.contains(&expected_path));
    assert!(links
        .facebook
        .starts_with("https://www.facebook.com/sharer/sharer.php?u="));
    assert!(links.facebook.contains(&expected_path));
}

#[tokio::test]
async fn test_share_links_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/feedbacks/999999999/share")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

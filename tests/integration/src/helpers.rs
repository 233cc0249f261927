//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on responses. Authentication rides on the session
//! cookie, so each logged-in user gets its own cookie-holding client.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use feedback_api::server::{create_app, create_app_state};
use feedback_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    /// Anonymous client with no cookie store
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Create a client with a cookie store, representing one browser session
    pub fn session_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()?)
    }

    /// Make a GET request with the anonymous client
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_with(&self.client, path).await
    }

    /// Make a GET request with a specific client
    pub async fn get_with(&self, client: &Client, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.get(&url).send().await?)
    }

    /// Make a POST request with the anonymous client
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.post_with(&self.client, path, body).await
    }

    /// Make a POST request with a specific client
    pub async fn post_with<T: Serialize>(
        &self,
        client: &Client,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with an empty body
    pub async fn post_empty_with(&self, client: &Client, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.post(&url).send().await?)
    }

    /// Make a DELETE request with a specific client
    pub async fn delete_with(&self, client: &Client, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(client.delete(&url).send().await?)
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("REDIS_URL").is_err() {
        eprintln!("Skipping test: REDIS_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

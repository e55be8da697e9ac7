//! Common test utilities for integration tests.
//!
//! Each test starts its own server on a free port with a known seed admin.
//!
//! # Example
//!
//! ```ignore
//! let server = TestServer::start().await;
//! let token = server.admin_token().await;
//! ```

#![allow(dead_code)]

use std::net::SocketAddr;

use marklee::server::start_server_on;
use marklee::startup::ServerConfig;
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const ADMIN_EMAIL: &str = "admin@test.local";
pub const ADMIN_PASSWORD: &str = "adminpass";

/// Config used by every test server.
pub fn test_config() -> ServerConfig {
    ServerConfig::default()
        .with_port(0)
        .with_admin_email(ADMIN_EMAIL)
        .with_admin_username("testadmin")
        .with_admin_password(ADMIN_PASSWORD)
}

/// A running server bound to `127.0.0.1:0`.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let (addr, handle) = start_server_on(addr, test_config())
            .await
            .expect("Failed to start server");
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        Self {
            addr,
            client,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Register a user; returns the response body.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> (u16, Value) {
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&json!({"username": username, "email": email, "password": password}))
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("Failed to parse JSON"))
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200, "login failed for {}", email);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        body["data"]["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Register a regular user and log them in.
    pub async fn user_token(&self, username: &str) -> String {
        let email = format!("{}@example.com", username);
        let (status, _) = self.register(username, &email, "secret1").await;
        assert_eq!(status, 201);
        self.login(&email, "secret1").await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

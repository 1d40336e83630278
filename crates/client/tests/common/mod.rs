//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the GoCD client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here points at a wiremock server's root, so the
//!   client's `api/` prefix lands on `/api/...` mock paths
//!
//! # What this does NOT handle
//! - Mock registration (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use gocd_client::testing::{load_fixture, load_fixture_text};

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use gocd_client::{CancellationToken, ClientError, GocdClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` value for `admin:badger`.
#[allow(dead_code)]
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46YmFkZ2Vy";

/// Client without credentials, pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> GocdClient {
    GocdClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Client authenticating as `admin:badger`, pointed at the mock server.
#[allow(dead_code)]
pub fn authed_client(server: &MockServer) -> GocdClient {
    GocdClient::builder()
        .base_url(server.uri())
        .credentials("admin".to_string(), "badger".to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// A JSON response serving `fixture_path` verbatim.
#[allow(dead_code)]
pub fn fixture_response(status: u16, fixture_path: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("content-type", "application/json")
        .set_body_string(load_fixture_text(fixture_path))
}

//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes a
//! mock provider server and an in-memory session for testing the login flow.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use tower_sessions::{MemoryStore, Session};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the test environment:
/// - Mock provider server serving the OAuth & messages endpoints
/// - Session backed by an in-memory store
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_token_endpoint(TEST_AUTH_CODE, TEST_ACCESS_TOKEN, 1)
///     .build()
///     .await?;
///
/// let config = test.config();
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Session for test authentication flows
    pub session: Session,

    /// Mock HTTP server for provider endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server and empty session.
    pub(crate) async fn new() -> Self {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        TestContext {
            session,
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock provider, e.g. `http://127.0.0.1:1234`
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

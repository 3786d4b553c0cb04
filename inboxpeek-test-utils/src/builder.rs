//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock provider before a test
//! runs. Endpoint methods can be chained, all of them are created on the mock server during the
//! final `build()` call in the order they were declared.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

use crate::{
    constant::TEST_APP_ID,
    context::TestContext,
    error::TestError,
    fixtures::auth::{mock_token_error_response, mock_token_response},
};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock + Send>;

/// Builder for declarative test initialization.
///
/// When several endpoints match the same request, mockito serves the first one which has not
/// yet received its expected number of requests. Declaring `with_unsynced_mailbox(n)` before
/// `with_message_endpoint(..)` therefore makes the first `n` inbox fetches come back empty.
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
        }
    }

    /// Add a token endpoint exchanging `code` for `access_token`.
    ///
    /// Creates `POST /oauth/token` matching an authorization code grant for the test
    /// application, with the client credentials sent in the request body.
    ///
    /// # Arguments
    /// - `code` - Authorization code the endpoint accepts
    /// - `access_token` - Token returned in the response
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_token_endpoint(
        mut self,
        code: &str,
        access_token: &str,
        expected_requests: usize,
    ) -> Self {
        let code = code.to_string();
        let body = mock_token_response(access_token).to_string();

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock("POST", "/oauth/token")
                .match_body(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("grant_type".into(), "authorization_code".into()),
                    Matcher::UrlEncoded("code".into(), code),
                    Matcher::UrlEncoded("client_id".into(), TEST_APP_ID.into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
        }));
        self
    }

    /// Add a token endpoint rejecting every code with the OAuth2 `error` code.
    pub fn with_token_error_endpoint(mut self, error: &str, expected_requests: usize) -> Self {
        let body = mock_token_error_response(error).to_string();

        self.mock_builders.push(Box::new(move |server| {
            server
                .mock("POST", "/oauth/token")
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
        }));
        self
    }

    /// Add a messages endpoint returning `message` as the first inbox message.
    ///
    /// # Arguments
    /// - `message` - Message payload, see [`crate::fixtures::message::mock_message`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_message_endpoint(mut self, message: Value, expected_requests: usize) -> Self {
        let body = json!([message]).to_string();

        self.mock_builders.push(Box::new(move |server| {
            messages_mock(server)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
        }));
        self
    }

    /// Add a messages endpoint returning an empty inbox, as a newly connected account does
    /// while the provider is still syncing it.
    pub fn with_unsynced_mailbox(mut self, expected_requests: usize) -> Self {
        self.mock_builders.push(Box::new(move |server| {
            messages_mock(server)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("[]")
                .expect(expected_requests)
        }));
        self
    }

    /// Add a messages endpoint failing with HTTP `status`.
    pub fn with_messages_error_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.mock_builders.push(Box::new(move |server| {
            messages_mock(server)
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(r#"{"type": "api_error", "message": "Request failed"}"#)
                .expect(expected_requests)
        }));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// The closure receives the mock server and returns a configured, not yet created, Mock.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + Send + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context, creating every configured mock endpoint.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await;

        for builder in self.mock_builders {
            let mock = builder(&mut context.server).create_async().await;
            context.mocks.push(mock);
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `GET /messages?offset=0&limit=1` with a bearer token
fn messages_mock(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/messages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "0".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .match_header("authorization", Matcher::Regex("^Bearer .+$".into()))
}

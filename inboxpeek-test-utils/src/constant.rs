//! Test configuration constants.
//!
//! Placeholder values used across all tests when configuring the application against the mock
//! provider. None of these are real credentials.

/// Mock provider application id.
pub static TEST_APP_ID: &str = "test_app_id";

/// Mock provider application secret.
pub static TEST_APP_SECRET: &str = "test_app_secret";

/// Authorization code accepted by the mock token endpoint.
pub static TEST_AUTH_CODE: &str = "abc123";

/// Access token issued by the mock token endpoint.
pub static TEST_ACCESS_TOKEN: &str = "tok1";

/// `Host` header used for requests sent through the router in tests.
pub static TEST_HOST: &str = "localhost:8888";

//! Tests for HTTP controller endpoints.
//!
//! Drives the route handlers directly with extracted arguments, verifying redirects, rendered
//! views, session side effects and error responses.

mod callback;

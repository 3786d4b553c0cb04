//! HTTP controller endpoints.
//!
//! Axum handlers for the two routes of the application: the inbox view at `/`, which starts the
//! login when no access token is in session, and the provider's login callback. Handlers
//! return `Result<_, Error>` and leave the mapping of failures to responses to the error types.

pub mod auth;
pub mod inbox;
pub mod util;

//! Error types for the inboxpeek server.
//!
//! Each domain (configuration, login flow, provider API) has its own error enum which is
//! aggregated into the crate-wide [`Error`]. All errors implement `IntoResponse` so route
//! handlers can return `Result<_, Error>` and let the boundary decide what the browser sees
//! versus what is only logged.

pub mod auth;
pub mod config;
pub mod provider;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{
    error::{auth::AuthError, config::ConfigError, provider::ProviderError},
    view,
};

/// Main error type for the inboxpeek server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and library
/// errors automatically. The `IntoResponse` implementation maps each variant to the HTTP
/// response appropriate for it.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing, invalid or placeholder environment values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Login flow error (provider denial, malformed callback, failed code exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Email provider API error (transport, status, mailbox not ready).
    #[error(transparent)]
    ProviderError(#[from] ProviderError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// IO error while binding or serving the listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - login denied by the provider, malformed callback, failed code exchange
/// - 504 Gateway Timeout - mailbox still syncing after the retry cap or view timeout
/// - 500 Internal Server Error - everything else (logged, generic body)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ProviderError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns the generic error page so that provider responses, tokens or
/// other internal detail never reach the browser.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(view::error::GENERIC_ERROR_PAGE),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::InternalServerError, provider::oauth::TokenExchangeError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login error: {0}")]
    ProviderDenied(String),
    #[error("Login callback received neither an authorization code nor an error")]
    MissingCallbackParams,
    #[error("Failed to exchange authorization code for an access token: {0}")]
    TokenExchange(#[from] TokenExchangeError),
    #[error("Failed to compute the login callback address: {0}")]
    CallbackAddressUnavailable(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::ProviderDenied(_) => {
                tracing::debug!("{}", self);

                // Display of this variant is exactly the text shown to the user
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::MissingCallbackParams => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    "Bad request: missing authorization code.",
                )
                    .into_response()
            }
            Self::TokenExchange(ref err) => {
                tracing::warn!(error = %err, "Authorization code exchange failed");

                (
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
                    .into_response()
            }
            Self::CallbackAddressUnavailable(_) => InternalServerError(self).into_response(),
        }
    }
}

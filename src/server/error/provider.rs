use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::InternalServerError, view};

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The account is connected but the provider has not synced any message yet.
    #[error("No messages yet, the mailbox is still syncing")]
    MailboxNotSynced,
    /// The mailbox stayed empty for every attempt the retry policy allowed.
    #[error("Mailbox still had no messages after {attempts} attempts")]
    MailboxNotReady { attempts: u32 },
    #[error("Viewing the mailbox did not complete within {0:?}")]
    ViewTimedOut(Duration),
    #[error("Provider rejected the access token")]
    Unauthorized,
    #[error("Provider API {endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        match self {
            Self::MailboxNotSynced | Self::MailboxNotReady { .. } | Self::ViewTimedOut(_) => {
                tracing::warn!("{}", self);

                (
                    StatusCode::GATEWAY_TIMEOUT,
                    Html(view::error::MAILBOX_SYNCING_PAGE),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::{
    controller::util::{callback::callback_url, view::view_first_message},
    error::Error,
    model::{app::AppState, session::auth::SessionAccessToken},
    service::auth::login::login_service,
};

/// Inbox route showing the first message of the logged in account
///
/// Without an access token in session the user is redirected to the provider to log in.
///
/// # Responses
/// - 200 (OK): HTML fragment with sender, subject and body of the first message
/// - 307 (Temporary Redirect): No access token in session, redirect to the provider login
/// - 500 (Internal Server Error): Callback address could not be computed or the provider API
///   failed
/// - 504 (Gateway Timeout): The mailbox is still syncing
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, Error> {
    if let Some(access_token) = SessionAccessToken::get(&session).await? {
        let view = view_first_message(&state, &session, &access_token).await?;

        return Ok(view.into_response());
    }

    let callback_url = callback_url(state.public_url.as_ref(), &headers)?;
    let login_url = login_service(&state.provider, &callback_url);

    Ok(Redirect::temporary(login_url.as_str()).into_response())
}

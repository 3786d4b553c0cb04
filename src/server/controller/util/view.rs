use axum::response::Html;
use tower_sessions::Session;

use crate::server::{
    error::{provider::ProviderError, Error},
    model::{app::AppState, session::auth::SessionAccessToken},
    service::message::MessageService,
    view::message::render_message,
};

/// Render the first message of the inbox for `access_token`
///
/// When the provider rejects the token it is removed from the session so the next visit to `/`
/// starts a new login instead of failing again.
pub async fn view_first_message(
    state: &AppState,
    session: &Session,
    access_token: &str,
) -> Result<Html<String>, Error> {
    let message_service = MessageService::new(&state.provider, &state.poll);

    match message_service.get_first_message(access_token).await {
        Ok(message) => Ok(Html(render_message(&message))),
        Err(Error::ProviderError(ProviderError::Unauthorized)) => {
            SessionAccessToken::remove(session).await?;

            tracing::debug!("Access token rejected by provider, removed it from session");

            Err(ProviderError::Unauthorized.into())
        }
        Err(e) => Err(e),
    }
}

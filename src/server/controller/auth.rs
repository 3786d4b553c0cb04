use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    controller::util::view::view_first_message,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::auth::SessionAccessToken},
    service::auth::callback::callback_service,
};

#[derive(Deserialize, Default)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Callback route the provider redirects to after login
///
/// Exchanges the authorization code for an access token, stores it in session, then renders the
/// inbox view in the same response.
///
/// # Responses
/// - 200 (OK): Login succeeded, HTML fragment with the first message
/// - 400 (Bad Request): The provider reported a login error, the code exchange failed, or the
///   request carried neither `code` nor `error`
/// - 500 (Internal Server Error): Session or provider API failure
/// - 504 (Gateway Timeout): The mailbox is still syncing
pub async fn login_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Html<String>, Error> {
    if let Some(error) = params.error {
        return Err(AuthError::ProviderDenied(error).into());
    }

    let Some(code) = params.code else {
        return Err(AuthError::MissingCallbackParams.into());
    };

    let access_token = callback_service(&state.provider, &code).await?;

    SessionAccessToken::insert(&session, &access_token).await?;

    view_first_message(&state, &session, &access_token).await
}

//! HTTP routing configuration.

use axum::{routing::get, Router};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Inbox view, redirects to the provider login without an access token
/// - `GET /login_callback` - OAuth callback handler
///
/// The session layer is applied by the caller so tests can supply their own store.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::inbox::index))
        .route(
            controller::util::callback::CALLBACK_PATH,
            get(controller::auth::login_callback),
        )
}

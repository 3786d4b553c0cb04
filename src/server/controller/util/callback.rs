use axum::http::{header, HeaderMap};
use url::Url;

use crate::server::error::{auth::AuthError, Error};

/// Path of the route the provider redirects to after login.
pub const CALLBACK_PATH: &str = "/login_callback";

/// Compute the absolute URL of the login callback route.
///
/// Uses the configured public URL when set, otherwise the `Host` header of the request.
///
/// # Returns
/// - `Ok(Url)`: Callback address to hand to the provider as `redirect_uri`
/// - `Err(Error::AuthError(AuthError::CallbackAddressUnavailable))`: No public URL configured
///   and the request carried no usable `Host` header
pub fn callback_url(public_url: Option<&Url>, headers: &HeaderMap) -> Result<Url, Error> {
    if let Some(base) = public_url {
        return base
            .join(CALLBACK_PATH.trim_start_matches('/'))
            .map_err(|e| AuthError::CallbackAddressUnavailable(e.to_string()).into());
    }

    let Some(host) = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
    else {
        return Err(AuthError::CallbackAddressUnavailable(
            "request carried no Host header".to_string(),
        )
        .into());
    };

    Url::parse(&format!("http://{}{}", host, CALLBACK_PATH)).map_err(|e| {
        AuthError::CallbackAddressUnavailable(format!("invalid Host header {:?}: {}", host, e))
            .into()
    })
}

use url::Url;

use crate::server::provider::ProviderClient;

/// Build the provider login URL which returns the user to `callback_url` after consent
pub fn login_service(provider: &ProviderClient, callback_url: &Url) -> Url {
    let login_url = provider.authorization_url(callback_url);

    tracing::debug!(callback_url = %callback_url, "Redirecting to provider login");

    login_url
}

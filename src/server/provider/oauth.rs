use std::borrow::Cow;

use oauth2::{
    basic::{BasicClient, BasicErrorResponse},
    AuthType, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet,
    EndpointSet, HttpClientError, RedirectUrl, RequestTokenError, Scope, TokenResponse, TokenUrl,
};
use url::Url;

use crate::server::{config::ProviderConfig, provider::ProviderClient};

/// OAuth2 client with the authorization & token endpoints set.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Error returned by the token endpoint exchange.
pub type TokenExchangeError =
    RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>;

pub fn build_oauth_client(app_id: &str, app_secret: &str, config: &ProviderConfig) -> OAuthClient {
    BasicClient::new(ClientId::new(app_id.to_string()))
        .set_client_secret(ClientSecret::new(app_secret.to_string()))
        .set_auth_uri(AuthUrl::from_url(config.auth_url.clone()))
        .set_token_uri(TokenUrl::from_url(config.token_url.clone()))
        // The provider expects client credentials in the form body, not basic auth
        .set_auth_type(AuthType::RequestBody)
}

impl ProviderClient {
    /// Build the URL of the provider's consent page
    ///
    /// The returned URL carries `response_type=code`, the application's `client_id`, a random
    /// `state`, the `redirect_uri` the provider sends the browser back to, and the configured
    /// scopes.
    pub fn authorization_url(&self, redirect_uri: &Url) -> Url {
        let (url, _state) = self
            .oauth
            .authorize_url(CsrfToken::new_random)
            .set_redirect_uri(Cow::Owned(RedirectUrl::from_url(redirect_uri.clone())))
            .add_scopes(self.scopes.iter().cloned().map(Scope::new))
            .url();

        url
    }

    /// Exchange an authorization code for an access token
    ///
    /// # Returns
    /// - `Ok(String)`: The access token issued for the account
    /// - `Err(TokenExchangeError)`: The code was invalid/expired or the token endpoint failed
    pub async fn exchange_code(&self, code: &str) -> Result<String, TokenExchangeError> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await?;

        Ok(token.access_token().secret().to_string())
    }
}

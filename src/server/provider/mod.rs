//! Client for the hosted email provider.
//!
//! Wraps the two halves of the provider: its OAuth2 endpoints (authorization URL and
//! authorization code exchange, see [`oauth`]) and the read-only messages API (see [`api`]).
//! The client is cheap to clone and shared between requests through the application state.

pub mod api;
pub mod oauth;

use url::Url;

use crate::server::{
    config::Config,
    error::{provider::ProviderError, Error},
    provider::oauth::{build_oauth_client, OAuthClient},
};

#[derive(Clone)]
pub struct ProviderClient {
    oauth: OAuthClient,
    http: reqwest::Client,
    api_url: Url,
    scopes: Vec<String>,
}

impl ProviderClient {
    /// Build a provider client from the application configuration
    ///
    /// # Returns
    /// - `Ok(ProviderClient)`: Client ready for login & API requests
    /// - `Err(Error::ProviderError)`: The underlying HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, Error> {
        // Following redirects from the token endpoint would allow SSRF
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ProviderError::from)?;

        Ok(Self {
            oauth: build_oauth_client(&config.app_id, &config.app_secret, &config.provider),
            http,
            api_url: config.provider.api_url.clone(),
            scopes: config.provider.scopes.clone(),
        })
    }
}

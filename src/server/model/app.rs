use url::Url;

use crate::server::{
    config::{Config, PollConfig},
    error::Error,
    provider::ProviderClient,
};

#[derive(Clone)]
pub struct AppState {
    pub provider: ProviderClient,
    pub poll: PollConfig,
    pub public_url: Option<Url>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, Error> {
        Ok(Self {
            provider: ProviderClient::new(config)?,
            poll: config.poll.clone(),
            public_url: config.public_url.clone(),
        })
    }
}

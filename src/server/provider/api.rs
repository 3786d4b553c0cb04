use reqwest::StatusCode;

use crate::server::{error::provider::ProviderError, model::message::Message, provider::ProviderClient};

pub const MESSAGES_ENDPOINT: &str = "messages";

impl ProviderClient {
    /// Fetch the most recent message of the account's inbox
    ///
    /// # Returns
    /// - `Ok(Some(Message))`: The first message
    /// - `Ok(None)`: The provider returned no message, a new account may still be syncing
    /// - `Err(ProviderError::Unauthorized)`: The access token was rejected
    /// - `Err(ProviderError)`: Transport failure, unexpected status or malformed body
    pub async fn first_message(&self, access_token: &str) -> Result<Option<Message>, ProviderError> {
        let url = self.api_url.join(MESSAGES_ENDPOINT)?;

        let response = self
            .http
            .get(url)
            .query(&[("offset", "0"), ("limit", "1")])
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ProviderError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint: MESSAGES_ENDPOINT.to_string(),
                status,
            });
        }

        let messages: Vec<Message> = response.json().await?;

        Ok(messages.into_iter().next())
    }
}

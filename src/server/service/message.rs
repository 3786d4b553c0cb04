use crate::server::{
    config::PollConfig,
    error::{provider::ProviderError, Error},
    model::message::Message,
    provider::ProviderClient,
    service::retry::RetryContext,
};

pub struct MessageService<'a> {
    provider: &'a ProviderClient,
    poll: &'a PollConfig,
}

impl<'a> MessageService<'a> {
    pub fn new(provider: &'a ProviderClient, poll: &'a PollConfig) -> Self {
        Self { provider, poll }
    }

    /// Fetch the first inbox message, waiting for a new account to finish syncing
    ///
    /// An empty inbox listing is treated as "not synced yet" and retried with exponential
    /// backoff. The whole operation, retries included, is bounded by the poll timeout.
    ///
    /// # Returns
    /// - `Ok(Message)`: The first message of the inbox
    /// - `Err(ProviderError::MailboxNotReady)`: Mailbox still empty after every attempt
    /// - `Err(ProviderError::ViewTimedOut)`: The poll timeout elapsed
    /// - `Err(Error)`: Any other provider failure, returned on the first occurrence
    pub async fn get_first_message(&self, access_token: &str) -> Result<Message, Error> {
        let ctx = RetryContext::from(self.poll);

        let poll = ctx.execute_with_retry("first inbox message", || async move {
            self.provider
                .first_message(access_token)
                .await?
                .ok_or_else(|| Error::from(ProviderError::MailboxNotSynced))
        });

        let result = match tokio::time::timeout(self.poll.timeout, poll).await {
            Ok(result) => result,
            Err(_) => return Err(ProviderError::ViewTimedOut(self.poll.timeout).into()),
        };

        result.map_err(|e| match e {
            Error::ProviderError(ProviderError::MailboxNotSynced) => {
                ProviderError::MailboxNotReady {
                    attempts: self.poll.max_attempts,
                }
                .into()
            }
            e => e,
        })
    }
}

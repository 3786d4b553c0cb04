use super::{provider::ProviderError, Error};

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (mailbox not synced yet)
    Retry,
    /// Failed permanently, abort the loop
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // A freshly connected account takes a little time to sync its first messages
            Self::ProviderError(ProviderError::MailboxNotSynced) => ErrorRetryStrategy::Retry,

            // Every other provider failure aborts the poll: transport errors, rejected tokens,
            // unexpected statuses. The cause is logged at the route boundary.
            Self::ProviderError(_) => ErrorRetryStrategy::Fail,

            // Session errors - the in-memory store does not recover by waiting
            Self::SessionError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - permanent failures (denied login, bad callback)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

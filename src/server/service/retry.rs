//! Retry logic with exponential backoff for service operations.
//!
//! This module provides the `RetryContext` for executing operations with automatic retry
//! logic and exponential backoff. It integrates with the error system to determine which
//! errors are retryable: everything else aborts on the first failure.

use std::{future::Future, time::Duration};

use crate::server::{
    config::PollConfig,
    error::{retry::ErrorRetryStrategy, Error},
};

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: total number of times the operation runs, including the first
/// - **Backoff strategy**: exponential starting at `initial_backoff` (2s, 4s, 8s, ...) and
///   never longer than `max_backoff`
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// When the attempts are exhausted the last retryable error is returned, callers translate it
/// into their own timeout error.
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::from(&state.poll);
///
/// let message = ctx
///     .execute_with_retry("first inbox message", || async {
///         provider
///             .first_message(access_token)
///             .await?
///             .ok_or_else(|| Error::from(ProviderError::MailboxNotSynced))
///     })
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Backoff after the first failed attempt (doubles with each retry)
    initial_backoff: Duration,
    /// Upper bound for a single backoff
    max_backoff: Duration,
}

impl RetryContext {
    pub fn new(max_attempts: u32, initial_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff,
        }
    }

    /// Backoff to wait after the `attempt`-th failed attempt (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt.saturating_sub(1));

        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// Runs the provided async operation up to `max_attempts` times, sleeping between attempts
    /// that fail with a retryable error. The sleep is a tokio timer, so a waiting request never
    /// occupies a runtime worker thread.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "first inbox message")
    /// - `operation` - Async function producing `Result<R, Error>`, invoked once per attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::warn!(
                                "Max attempts ({}) exceeded for {}: {}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff_for(attempt_count);

                        tracing::warn!(
                            "{}. Retrying {} (attempt {}/{}) after {:?}",
                            e,
                            description,
                            attempt_count + 1,
                            self.max_attempts,
                            backoff
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl From<&PollConfig> for RetryContext {
    fn from(config: &PollConfig) -> Self {
        Self::new(config.max_attempts, config.initial_backoff, config.max_backoff)
    }
}

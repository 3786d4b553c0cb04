use std::time::Duration;

use inboxpeek::server::{
    error::{provider::ProviderError, Error},
    provider::ProviderClient,
    service::message::MessageService,
};
use inboxpeek_test_utils::prelude::*;

use crate::util::TestContextExt;

#[tokio::test]
/// Expect a single fetch when the first message is available right away
async fn returns_message_on_first_attempt() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_message_endpoint(mock_message("Jane", "jane@x.com", "Hi", "Hello"), 1)
        .build()
        .await?;
    let config = test.config();
    let provider = ProviderClient::new(&config).unwrap();

    let result = MessageService::new(&provider, &config.poll)
        .get_first_message(TEST_ACCESS_TOKEN)
        .await;

    let message = result.unwrap();
    assert_eq!(message.subject.as_deref(), Some("Hi"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// N "not yet synced" responses followed by a message must take exactly N+1 fetches
async fn polls_until_mailbox_synced() -> Result<(), TestError> {
    let not_synced = 3;
    let test = TestBuilder::new()
        .with_unsynced_mailbox(not_synced)
        .with_message_endpoint(mock_message("Jane", "jane@x.com", "Hi", "Hello"), 1)
        .build()
        .await?;
    let config = test.config();
    let provider = ProviderClient::new(&config).unwrap();

    let result = MessageService::new(&provider, &config.poll)
        .get_first_message(TEST_ACCESS_TOKEN)
        .await;

    assert_eq!(result.unwrap().body.as_deref(), Some("Hello"));
    // 3 empty responses and 1 message response, 4 fetches in total
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a typed timeout error once the attempt cap is reached
async fn fails_after_max_attempts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_unsynced_mailbox(3).build().await?;
    let mut config = test.config();
    config.poll.max_attempts = 3;
    let provider = ProviderClient::new(&config).unwrap();

    let result = MessageService::new(&provider, &config.poll)
        .get_first_message(TEST_ACCESS_TOKEN)
        .await;

    assert!(matches!(
        result,
        Err(Error::ProviderError(ProviderError::MailboxNotReady {
            attempts: 3
        }))
    ));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Any failure other than an empty inbox aborts the poll immediately
async fn aborts_on_api_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_messages_error_endpoint(500, 1)
        .build()
        .await?;
    let config = test.config();
    let provider = ProviderClient::new(&config).unwrap();

    let result = MessageService::new(&provider, &config.poll)
        .get_first_message(TEST_ACCESS_TOKEN)
        .await;

    assert!(matches!(
        result,
        Err(Error::ProviderError(ProviderError::Status { .. }))
    ));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the view timeout to cut a long backoff short
async fn times_out_while_waiting() -> Result<(), TestError> {
    let test = TestBuilder::new().with_unsynced_mailbox(1).build().await?;
    let mut config = test.config();
    config.poll.initial_backoff = Duration::from_secs(30);
    config.poll.max_backoff = Duration::from_secs(30);
    config.poll.timeout = Duration::from_millis(200);
    let provider = ProviderClient::new(&config).unwrap();

    let result = MessageService::new(&provider, &config.poll)
        .get_first_message(TEST_ACCESS_TOKEN)
        .await;

    assert!(matches!(
        result,
        Err(Error::ProviderError(ProviderError::ViewTimedOut(_)))
    ));

    Ok(())
}

#[tokio::test]
/// Fetching twice with a stable mailbox yields the same message, nothing is cached locally
async fn repeated_fetches_are_consistent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_message_endpoint(mock_message("Jane", "jane@x.com", "Hi", "Hello"), 2)
        .build()
        .await?;
    let config = test.config();
    let provider = ProviderClient::new(&config).unwrap();
    let service = MessageService::new(&provider, &config.poll);

    let first = service.get_first_message(TEST_ACCESS_TOKEN).await.unwrap();
    let second = service.get_first_message(TEST_ACCESS_TOKEN).await.unwrap();

    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}

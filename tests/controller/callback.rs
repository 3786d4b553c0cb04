use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use inboxpeek::server::{
    controller::auth::{login_callback, CallbackParams},
    model::session::auth::SessionAccessToken,
};
use inboxpeek_test_utils::prelude::*;

use crate::util::{assert_in_order, response_body, TestContextExt};

fn code_params(code: &str) -> CallbackParams {
    CallbackParams {
        code: Some(code.to_string()),
        error: None,
    }
}

#[tokio::test]
/// Test the rendered message and stored token after a successful code exchange
async fn stores_token_and_renders_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(TEST_AUTH_CODE, TEST_ACCESS_TOKEN, 1)
        .with_message_endpoint(mock_message("Jane", "jane@x.com", "Hi", "Hello"), 1)
        .build()
        .await?;

    let result = login_callback(
        State(test.state()),
        test.session.clone(),
        Query(code_params(TEST_AUTH_CODE)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_in_order(
        &response_body(resp).await,
        &["Jane", "jane@x.com", "Hi", "Hello"],
    );

    let token = SessionAccessToken::get(&test.session).await.unwrap();
    assert_eq!(token.as_deref(), Some(TEST_ACCESS_TOKEN));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect exactly `Login error: X` and no token for a provider error
async fn returns_login_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let params = CallbackParams {
        code: None,
        error: Some("access_denied".to_string()),
    };

    let result = login_callback(State(test.state()), test.session.clone(), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response_body(resp).await, "Login error: access_denied");
    assert!(SessionAccessToken::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect the error parameter to win when both are present, without exchanging the code
async fn error_takes_precedence_over_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(TEST_AUTH_CODE, TEST_ACCESS_TOKEN, 0)
        .build()
        .await?;
    let params = CallbackParams {
        code: Some(TEST_AUTH_CODE.to_string()),
        error: Some("server_error".to_string()),
    };

    let result = login_callback(State(test.state()), test.session.clone(), Query(params)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(response_body(resp).await, "Login error: server_error");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Test the return of a 400 bad request for a callback with neither code nor error
async fn fails_without_code_or_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login_callback(
        State(test.state()),
        test.session.clone(),
        Query(CallbackParams::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionAccessToken::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Test the return of a 400 bad request asking to retry when the exchange fails
async fn fails_when_exchange_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_error_endpoint("invalid_grant", 1)
        .build()
        .await?;

    let result = login_callback(
        State(test.state()),
        test.session.clone(),
        Query(code_params("expired_code")),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_body(resp).await,
        "There was an issue logging you in, please try again."
    );
    assert!(SessionAccessToken::get(&test.session).await.unwrap().is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the token to stay in session when the first view times out on an unsynced mailbox
async fn keeps_token_when_mailbox_not_ready() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_token_endpoint(TEST_AUTH_CODE, TEST_ACCESS_TOKEN, 1)
        .with_unsynced_mailbox(5)
        .build()
        .await?;

    let result = login_callback(
        State(test.state()),
        test.session.clone(),
        Query(code_params(TEST_AUTH_CODE)),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    let token = SessionAccessToken::get(&test.session).await.unwrap();
    assert_eq!(token.as_deref(), Some(TEST_ACCESS_TOKEN));
    test.assert_mocks();

    Ok(())
}

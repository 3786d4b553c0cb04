//! End-to-end tests through the full router with the session layer, as a browser would see
//! the application.

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use inboxpeek::server::{model::app::AppState, router::routes, startup::build_session_layer};
use inboxpeek_test_utils::prelude::*;
use mockito::Matcher;
use tower::ServiceExt;
use url::Url;

use crate::util::{assert_in_order, response_body, TestContextExt};

fn app(state: AppState) -> Router {
    routes().with_state(state).layer(build_session_layer())
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri).header(header::HOST, "host");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn session_cookie(resp: &Response) -> String {
    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should start a session")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
/// Redirect, callback with code, then a revisit served from the session token
async fn login_flow_renders_first_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/oauth/token")
                .match_body(Matcher::AllOf(vec![
                    Matcher::UrlEncoded("client_id".into(), "a".into()),
                    Matcher::UrlEncoded("client_secret".into(), "b".into()),
                    Matcher::UrlEncoded("code".into(), "abc123".into()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(mock_token_response("tok1").to_string())
                .expect(1)
        })
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/messages")
                .match_query(Matcher::Any)
                .match_header("authorization", "Bearer tok1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    serde_json::json!([mock_message("Jane", "jane@x.com", "Hi", "Hello")])
                        .to_string(),
                )
                .expect(2)
        })
        .build()
        .await?;
    let mut config = test.config();
    config.app_id = "a".to_string();
    config.app_secret = "b".to_string();
    let app = app(AppState::new(&config).unwrap());

    // Fresh session: redirected to the provider
    let resp = get(&app, "/", None).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = Url::parse(
        resp.headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap(),
    )
    .unwrap();
    let params: HashMap<String, String> = location.query_pairs().into_owned().collect();
    assert!(location
        .as_str()
        .starts_with(&format!("{}/oauth/authorize?", test.server_url())));
    assert_eq!(params.get("client_id").unwrap(), "a");
    assert_eq!(params.get("response_type").unwrap(), "code");
    assert_eq!(
        params.get("redirect_uri").unwrap(),
        "http://host/login_callback"
    );

    // Provider sends the browser back with a code
    let resp = get(&app, "/login_callback?code=abc123", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);
    assert_in_order(
        &response_body(resp).await,
        &["Jane", "jane@x.com", "Hi", "Hello"],
    );

    // Revisiting with the session cookie skips the login
    let resp = get(&app, "/", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_in_order(
        &response_body(resp).await,
        &["Jane", "jane@x.com", "Hi", "Hello"],
    );

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
async fn login_error_is_plain_text() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.state());

    let resp = get(&app, "/login_callback?error=access%20denied", None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(response_body(resp).await, "Login error: access denied");

    Ok(())
}

#[tokio::test]
async fn callback_without_params_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.state());

    let resp = get(&app, "/login_callback", None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Only the two GET routes exist
async fn unknown_route_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(test.state());

    let resp = get(&app, "/logout", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

use serde_json::{json, Value};

/// Successful token endpoint response issuing `access_token`
pub fn mock_token_response(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "account_id": "awa6ltos76vz5hvphkp8k17nt",
        "email_address": "jane@x.com",
        "provider": "gmail",
    })
}

/// OAuth2 error response from the token endpoint, e.g. `invalid_grant` for an expired code
pub fn mock_token_error_response(error: &str) -> Value {
    json!({
        "error": error,
        "error_description": "The authorization code is invalid or has expired",
    })
}

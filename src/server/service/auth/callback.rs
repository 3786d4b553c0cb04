use crate::server::{
    error::{auth::AuthError, Error},
    provider::ProviderClient,
};

/// Exchange the authorization code from the login callback for an access token
///
/// # Returns
/// - `Ok(String)`: Access token for the account that granted consent
/// - `Err(Error::AuthError(AuthError::TokenExchange))`: Code invalid, expired or the token
///   endpoint failed
pub async fn callback_service(provider: &ProviderClient, code: &str) -> Result<String, Error> {
    let access_token = provider
        .exchange_code(code)
        .await
        .map_err(AuthError::from)?;

    tracing::debug!("Exchanged authorization code for access token");

    Ok(access_token)
}

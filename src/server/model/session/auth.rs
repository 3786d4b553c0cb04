//! Authentication session data models.
//!
//! Stores the access token obtained from the provider's token endpoint so subsequent visits to
//! the inbox view skip the login redirect.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for storing the provider access token.
///
/// Namespaced under "inboxpeek:auth:" to avoid collisions with other session data.
pub const SESSION_ACCESS_TOKEN_KEY: &str = "inboxpeek:auth:access_token";

/// Session wrapper for the provider access token.
#[derive(Default, Deserialize, Serialize)]
pub struct SessionAccessToken(pub String);

impl SessionAccessToken {
    /// Inserts the access token into the session, replacing any previous token.
    ///
    /// # Arguments
    /// - `session` - User's session for storing the token
    /// - `access_token` - Token returned by the authorization code exchange
    ///
    /// # Returns
    /// - `Ok(())` - Token stored in session
    /// - `Err(Error)` - Session storage failed (serialization error)
    pub async fn insert(session: &Session, access_token: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_ACCESS_TOKEN_KEY,
                SessionAccessToken(access_token.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Retrieves the access token from the session.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Token present in session
    /// - `Ok(None)` - User has not logged in yet
    /// - `Err(Error)` - Session retrieval failed
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .get::<SessionAccessToken>(SESSION_ACCESS_TOKEN_KEY)
            .await?
            .map(|SessionAccessToken(token)| token);

        Ok(token)
    }

    /// Removes and returns the access token from the session.
    ///
    /// Used when the provider rejects the token so the next visit starts a fresh login.
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .remove::<SessionAccessToken>(SESSION_ACCESS_TOKEN_KEY)
            .await?
            .map(|SessionAccessToken(token)| token);

        Ok(token)
    }
}

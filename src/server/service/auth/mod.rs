//! Authentication service layer.
//!
//! Handles both halves of the OAuth2 authorization code flow: building the URL the browser is
//! redirected to and exchanging the code the provider sends back for an access token.

pub mod callback;
pub mod login;

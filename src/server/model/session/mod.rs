//! Session data models and utilities.
//!
//! Type-safe wrappers for the data stored in the tower-sessions session. The only value kept
//! per browser is the provider access token.

pub mod auth;

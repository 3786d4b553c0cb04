//! Fixture payloads returned by the mock provider endpoints.
//!
//! - `auth` - token endpoint responses
//! - `message` - messages API payloads

pub mod auth;
pub mod message;

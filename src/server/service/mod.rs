//! Service layer for business logic.
//!
//! Services sit between the HTTP controllers and the provider client: building the login URL,
//! exchanging authorization codes, and polling the inbox with retry & timeout handling.

pub mod auth;
pub mod message;
pub mod retry;

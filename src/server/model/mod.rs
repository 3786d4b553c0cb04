//! Server application models and type definitions.
//!
//! This module contains the application state shared by route handlers, the representation
//! of messages fetched from the provider, and typed wrappers for session data.

pub mod app;
pub mod message;
pub mod session;

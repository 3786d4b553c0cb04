//! HTML rendering for the inbox view and error pages.

pub mod error;
pub mod message;

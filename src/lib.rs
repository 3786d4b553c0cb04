//! inboxpeek: log in to a hosted email provider with OAuth2 and show the first inbox message.

pub mod server;

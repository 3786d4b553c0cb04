//! Server application core modules.
//!
//! This module contains all server-side functionality: configuration, HTTP routing, the OAuth2
//! login flow against the email provider, the provider API client, and rendering of the inbox
//! view.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod provider;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;

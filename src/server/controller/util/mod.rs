//! Utility functions for controller request handling.
//!
//! Computing the externally reachable callback address and rendering the inbox view shared by
//! both routes.

pub mod callback;
pub mod view;

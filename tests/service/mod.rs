//! Tests for the service layer against the mock provider.

mod message;

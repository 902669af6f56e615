//! Tests for user controller endpoints.
//!
//! This module contains integration tests for user-related HTTP endpoints,
//! including profile updates and web push subscription management.

mod update_profile;

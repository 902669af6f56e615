//! Test configuration constants for provider client setup.
//!
//! This module defines standard constant values used across all tests when
//! pointing the realtime, SFU, and push clients at the mock server. These
//! values are not real credentials but placeholder values for testing
//! purposes.

/// Mock provider API key for testing.
///
/// Placeholder bearer token used when creating test provider clients. Not a
/// real credential.
pub static TEST_API_KEY: &str = "test_api_key";

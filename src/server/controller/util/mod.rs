//! Utility functions for controller request handling.
//!
//! This module provides reusable helper functions used across controllers,
//! currently user session retrieval for protected endpoints.

pub mod current_user;

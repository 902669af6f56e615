//! VIP page data repositories.
//!
//! This module contains repositories for subscriber-gated creator pages:
//! the pages themselves, the content posted to them, and the subscriptions
//! that grant access to non-preview content.

pub mod content;
pub mod page;
pub mod subscription;

//! Tests for VIP controller endpoints.
//!
//! This module contains integration tests for the VIP subscription
//! vertical's HTTP endpoints: page management, gated content, and the
//! subscribe/unsubscribe flow.

mod delete_vip_content;
mod get_vip_page;
mod list_vip_content;
mod unsubscribe_vip_page;
mod update_vip_page;

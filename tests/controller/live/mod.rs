//! Tests for live controller endpoints.
//!
//! This module contains integration tests for the livestream vertical's
//! HTTP endpoints: channel pages, the live-now listing, and the broadcast
//! start/stop/join flow against a mocked SFU provider.

mod get_live_page;
mod join_live_stream;
mod list_live_now;
mod stop_live_stream;
mod upsert_live_page;

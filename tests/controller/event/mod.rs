//! Tests for event controller endpoints.
//!
//! This module contains integration tests for community event HTTP
//! endpoints, covering posting, browsing, editing, and deletion.

mod create_event;
mod delete_event;
mod list_events;
mod update_event;

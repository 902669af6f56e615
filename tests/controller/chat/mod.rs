//! Tests for chat controller endpoints.
//!
//! This module contains integration tests for the messaging HTTP
//! endpoints: opening conversations, sending into them, and read
//! tracking.

mod open_chat;
mod send_chat_message;

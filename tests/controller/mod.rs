//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response status mapping, session handling, and
//! error handling for all API endpoints.

mod chat;
mod event;
mod job;
mod live;
mod user;
mod vip;

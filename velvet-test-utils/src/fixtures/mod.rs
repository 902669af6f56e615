//! Test fixture modules for database and HTTP mock creation.
//!
//! This module contains fixture utilities for creating test data and mock HTTP endpoints
//! during test execution. Each submodule provides specialized fixtures for one vertical
//! of the marketplace:
//!
//! - `user` - User accounts and push subscription records
//! - `ad` - Private ad listings
//! - `offer` - Offers against private ads
//! - `dating` - Dating pages and swipes
//! - `chat` - Direct and match conversations
//! - `vip` - VIP pages, gated content, and subscriptions
//! - `live` - Livestream channel pages and broadcasts
//! - `event` - Community event postings
//! - `job` - Job postings and applications
//! - `integration` - Mock endpoints for the realtime, SFU, and push providers

pub mod ad;
pub mod chat;
pub mod dating;
pub mod event;
pub mod integration;
pub mod job;
pub mod live;
pub mod offer;
pub mod user;
pub mod vip;

//! Livestream data repositories.
//!
//! This module contains repositories for streamer channels and the broadcasts
//! run on them. A stream row is live while its `ended_at` is null; the media
//! itself is carried by the external SFU.

pub mod page;
pub mod stream;

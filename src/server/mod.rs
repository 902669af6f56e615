//! Server application core modules.
//!
//! This module contains all server-side functionality for the Velvet marketplace,
//! including HTTP routing, session authentication, database operations, background
//! workers, job scheduling, and the HTTP clients for the delegated realtime, media,
//! and push providers. It provides the complete backend infrastructure for the
//! marketplace verticals: private ads and offers, dating, VIP pages, livestreams,
//! events, jobs, and messaging.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod integration;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod worker;

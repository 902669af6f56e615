//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (marketplace verticals and user management). Business
//! rules live one layer up in the services; repositories only read and write rows.

pub mod ad;
pub mod chat;
pub mod dating;
pub mod event;
pub mod job;
pub mod live;
pub mod offer;
pub mod user;
pub mod vip;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic, coordinates
//! between repositories and the delegated SaaS providers, and handles multi-step
//! operations. Services include authentication, the marketplace verticals (ads,
//! offers, dating, VIP pages, livestreams, events, jobs, messaging), push
//! notification fan-out, retry logic, and user management.

pub mod ad;
pub mod auth;
pub mod chat;
pub mod dating;
pub mod event;
pub mod job;
pub mod live;
pub mod notify;
pub mod offer;
pub mod retry;
pub mod user;
pub mod vip;

//! HTTP controller endpoints for the Velvet web API.
//!
//! This module contains Axum handlers for every vertical of the marketplace.
//! Controllers handle HTTP requests, resolve the session user, delegate to the
//! service layer, and select the response status. They integrate with
//! tower-sessions for session management and use utoipa for OpenAPI
//! documentation.

pub mod ad;
pub mod auth;
pub mod chat;
pub mod dating;
pub mod event;
pub mod job;
pub mod live;
pub mod offer;
pub mod user;
pub mod util;
pub mod vip;

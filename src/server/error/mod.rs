//! Error types for the Velvet server application.
//!
//! This module provides a unified error handling system with specialized error types
//! for different domains (authentication, configuration, offer lifecycle, external
//! integrations, worker queue). All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for ergonomic error definitions with automatic
//! `Display` and `Error` trait implementations.

pub mod auth;
pub mod config;
pub mod integration;
pub mod offer;
pub mod retry;
pub mod worker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, integration::IntegrationError, offer::OfferError,
        worker::WorkerError,
    },
};

/// Main error type for the Velvet server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse`
/// implementation maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, credentials, user validation)
/// - Offer lifecycle errors (invalid transitions, dispute window)
/// - Integration errors (realtime, SFU, and push provider requests)
/// - Worker queue errors (job validation, scheduling)
/// - External library errors (database, sessions, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, credentials, user validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Offer lifecycle error (invalid transition, closed dispute window).
    #[error(transparent)]
    OfferError(#[from] OfferError),
    /// Error from one of the delegated SaaS providers.
    #[error(transparent)]
    IntegrationError(#[from] IntegrationError),
    /// Worker queue error (job validation, serialization, scheduling).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Request payload failed domain validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),
    /// Requested resource does not exist or is not visible to the caller.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Request conflicts with the current state of the resource.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Velvet's code.
    ///
    /// This error should never occur in normal operation and indicates a programming
    /// error that needs to be reported.
    #[error("Internal error within Velvet's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Redis job queue error (connection, enqueue failures).
    #[error(transparent)]
    ApalisRedisError(#[from] apalis_redis::RedisError),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error
/// responses. Most errors are treated as internal server errors (500) with logging,
/// while client-facing error types have custom response mappings.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found - For missing or hidden resources
/// - 409 Conflict - For requests that clash with current state
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::OfferError(err) => err.into_response(),
            Self::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: message })).into_response()
            }
            Self::Conflict(message) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

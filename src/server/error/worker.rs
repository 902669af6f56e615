//! Worker queue error types.
//!
//! This module defines errors related to worker job serialization and scheduling.
//! Worker errors typically indicate programming bugs (invalid job parameters) or
//! Redis/queue infrastructure issues that prevent jobs from being properly enqueued
//! or processed.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Worker queue error type.
///
/// These errors occur during worker job creation, serialization, or scheduling.
/// All worker errors are treated as internal server errors (500) since they indicate
/// issues with the background job system rather than client errors.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Failed to serialize or deserialize a WorkerJob.
    ///
    /// This error occurs when converting a WorkerJob to/from JSON for Redis storage.
    /// It may indicate a schema mismatch or corruption in the Redis data, or an issue
    /// with the serde implementation.
    #[error("Failed to serialize/deserialize WorkerJob: {0}")]
    SerializationError(String),

    /// Failed to schedule a task in the worker queue.
    ///
    /// This error occurs when the worker queue system cannot accept a new job,
    /// typically due to Redis connection issues or queue full conditions.
    #[error("Failed to schedule task: {0}")]
    Scheduler(String),
}

/// Converts worker errors into HTTP responses.
///
/// All worker errors are treated as internal server errors (500) since they indicate
/// issues with the background job system rather than client errors. The error is logged
/// for debugging and a generic error message is returned to the client.
impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

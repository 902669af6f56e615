use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Error talking to one of the delegated SaaS providers (realtime
/// messaging, SFU media, web push).
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// The provider could not be reached, or its response body could not
    /// be read.
    #[error("Request to {provider} failed: {source}")]
    Unreachable {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status.
    #[error("{provider} returned status {status}")]
    RequestFailed {
        provider: &'static str,
        status: reqwest::StatusCode,
    },
}

impl IntoResponse for IntegrationError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

use sea_orm::DbErr;

use super::{integration::IntegrationError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Provider request errors - transport failures and 5xx responses are
            // worth retrying, anything else is a request we need to fix
            Self::IntegrationError(integration_err) => match integration_err {
                // Network error or connection issue - should retry
                IntegrationError::Unreachable { .. } => ErrorRetryStrategy::Retry,
                IntegrationError::RequestFailed { status, .. } => {
                    if status.is_server_error() {
                        // Provider is temporarily unavailable, backoff and retry later
                        ErrorRetryStrategy::Retry
                    } else {
                        // We're making invalid requests to the provider, this is a flaw
                        // in the code that needs to be fixed
                        ErrorRetryStrategy::Fail
                    }
                }
            },

            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Schema/migration errors
                    // - Record not found/inserted/updated
                    // These indicate programming bugs or data issues that won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // Job queue errors - transient, Redis connection issues
            Self::ApalisRedisError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - permanent failures (bad requests, missing data)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Offer lifecycle errors - permanent failures (state conflicts)
            Self::OfferError(_) => ErrorRetryStrategy::Fail,

            // Client-facing request errors - permanent failures
            Self::ValidationError(_) => ErrorRetryStrategy::Fail,
            Self::NotFound(_) => ErrorRetryStrategy::Fail,
            Self::Conflict(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within Velvet's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,

            // Worker errors - permanent failures (validation errors)
            Self::WorkerError(_) => ErrorRetryStrategy::Fail,

            // Job scheduler errors - permanent failures (configuration issue)
            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

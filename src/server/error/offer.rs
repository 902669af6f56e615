use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum OfferError {
    /// The offer is not in a status the requested action can move it from.
    #[error("Offer in status {status:?} cannot be {action}")]
    InvalidTransition { status: String, action: &'static str },
    /// Disputes are only accepted for a fixed window after completion.
    #[error("Dispute window of {window_hours} hours has closed for offer {offer_id}")]
    DisputeWindowClosed { offer_id: i32, window_hours: i64 },
    #[error("Clients cannot make an offer on their own ad")]
    OwnAd,
}

impl IntoResponse for OfferError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidTransition { ref status, action } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("Offer in status {status} cannot be {action}"),
                }),
            )
                .into_response(),
            Self::DisputeWindowClosed { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "The dispute window for this offer has closed".to_string(),
                }),
            )
                .into_response(),
            Self::OwnAd => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "You cannot make an offer on your own ad".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

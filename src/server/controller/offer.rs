use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        offer::{CreateOfferDto, OfferDto, OfferListQuery},
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::offer::OfferService,
    },
};

pub static OFFER_TAG: &str = "offers";

/// Create an offer on an ad
///
/// The logged in user becomes the offer's client; the ad owner is the
/// provider.
#[utoipa::path(
    post,
    path = "/api/ads/{ad_id}/offers",
    tag = OFFER_TAG,
    params(("ad_id" = i32, Path, description = "ID of the ad the offer targets")),
    request_body = CreateOfferDto,
    responses(
        (status = 201, description = "Offer created", body = OfferDto),
        (status = 400, description = "Invalid offer terms, or the ad is your own", body = ErrorDto),
        (status = 404, description = "Ad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    session: Session,
    Path(ad_id): Path<i32>,
    Json(offer): Json<CreateOfferDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.create_offer(user.id, ad_id, offer).await?;

    Ok((StatusCode::CREATED, Json(offer)))
}

/// List the logged in user's offers, newest first
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    params(OfferListQuery),
    responses(
        (status = 200, description = "Offers for the requested role", body = Vec<OfferDto>),
        (status = 400, description = "Unknown role or status filter", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_offers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OfferListQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offers = offer_service.list_offers(user.id, query).await?;

    Ok((StatusCode::OK, Json(offers)))
}

/// Get a single offer
///
/// Only the client and the provider can see an offer.
#[utoipa::path(
    get,
    path = "/api/offers/{offer_id}",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "The requested offer", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.get_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

/// Accept an open offer as the provider
///
/// Funds are held in escrow from this point.
#[utoipa::path(
    post,
    path = "/api/offers/{offer_id}/accept",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "Offer accepted", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer is not in a state that can be accepted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.accept_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

/// Reject an open offer as the provider
#[utoipa::path(
    post,
    path = "/api/offers/{offer_id}/reject",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "Offer rejected", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer is not in a state that can be rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.reject_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

/// Cancel an offer as the client
///
/// Allowed while the offer is open or pending; held funds are refunded.
#[utoipa::path(
    post,
    path = "/api/offers/{offer_id}/cancel",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "Offer cancelled", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer is not in a state that can be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.cancel_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

/// Mark a pending offer as completed, as the provider
///
/// Opens the dispute window for the client.
#[utoipa::path(
    post,
    path = "/api/offers/{offer_id}/complete",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "Offer completed", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer is not in a state that can be completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.complete_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

/// Dispute a completed offer as the client
///
/// Only allowed while the dispute window is open.
#[utoipa::path(
    post,
    path = "/api/offers/{offer_id}/dispute",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "Offer disputed", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer cannot be disputed, or the window has closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dispute_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.dispute_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

/// Release a completed offer's funds early, as the client
#[utoipa::path(
    post,
    path = "/api/offers/{offer_id}/release",
    tag = OFFER_TAG,
    params(("offer_id" = i32, Path, description = "ID of the offer")),
    responses(
        (status = 200, description = "Offer released", body = OfferDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer is not in a state that can be released", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_offer(
    State(state): State<AppState>,
    session: Session,
    Path(offer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let offer_service = OfferService::new(&state.db, &state.push);
    let offer = offer_service.release_offer(user.id, offer_id).await?;

    Ok((StatusCode::OK, Json(offer)))
}

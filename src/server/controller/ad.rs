use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        ad::{AdListQuery, CreatePrivateAdDto, PrivateAdDto, UpdatePrivateAdDto},
        api::ErrorDto,
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::ad::AdService,
    },
};

pub static AD_TAG: &str = "ads";

/// Create a private ad owned by the logged in user
#[utoipa::path(
    post,
    path = "/api/ads",
    tag = AD_TAG,
    request_body = CreatePrivateAdDto,
    responses(
        (status = 201, description = "Ad created", body = PrivateAdDto),
        (status = 400, description = "Title, description, or price out of bounds", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ad(
    State(state): State<AppState>,
    session: Session,
    Json(ad): Json<CreatePrivateAdDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ad_service = AdService::new(&state.db);
    let ad = ad_service.create_ad(user.id, ad).await?;

    Ok((StatusCode::CREATED, Json(ad)))
}

/// Browse active ads, newest first
#[utoipa::path(
    get,
    path = "/api/ads",
    tag = AD_TAG,
    params(AdListQuery),
    responses(
        (status = 200, description = "Active ads matching the filters", body = Vec<PrivateAdDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_ads(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdListQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let ad_service = AdService::new(&state.db);
    let ads = ad_service.list_ads(query).await?;

    Ok((StatusCode::OK, Json(ads)))
}

/// Get all ads owned by the logged in user, including inactive ones
#[utoipa::path(
    get,
    path = "/api/ads/mine",
    tag = AD_TAG,
    responses(
        (status = 200, description = "The user's own ads", body = Vec<PrivateAdDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_own_ads(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ad_service = AdService::new(&state.db);
    let ads = ad_service.list_own_ads(user.id).await?;

    Ok((StatusCode::OK, Json(ads)))
}

/// Get a single ad
///
/// Inactive ads are only visible to their owner.
#[utoipa::path(
    get,
    path = "/api/ads/{ad_id}",
    tag = AD_TAG,
    params(("ad_id" = i32, Path, description = "ID of the ad")),
    responses(
        (status = 200, description = "The requested ad", body = PrivateAdDto),
        (status = 404, description = "Ad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ad(
    State(state): State<AppState>,
    session: Session,
    Path(ad_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ad_service = AdService::new(&state.db);
    let ad = ad_service.get_ad(ad_id, user.id).await?;

    Ok((StatusCode::OK, Json(ad)))
}

/// Update an ad owned by the logged in user
///
/// Updating an ad renews its expiry.
#[utoipa::path(
    put,
    path = "/api/ads/{ad_id}",
    tag = AD_TAG,
    params(("ad_id" = i32, Path, description = "ID of the ad")),
    request_body = UpdatePrivateAdDto,
    responses(
        (status = 200, description = "Ad updated", body = PrivateAdDto),
        (status = 400, description = "Title, description, or price out of bounds", body = ErrorDto),
        (status = 404, description = "Ad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ad(
    State(state): State<AppState>,
    session: Session,
    Path(ad_id): Path<i32>,
    Json(update): Json<UpdatePrivateAdDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ad_service = AdService::new(&state.db);
    let ad = ad_service.update_ad(user.id, ad_id, update).await?;

    Ok((StatusCode::OK, Json(ad)))
}

/// Delete an ad owned by the logged in user
#[utoipa::path(
    delete,
    path = "/api/ads/{ad_id}",
    tag = AD_TAG,
    params(("ad_id" = i32, Path, description = "ID of the ad")),
    responses(
        (status = 204, description = "Ad deleted"),
        (status = 404, description = "Ad not found", body = ErrorDto),
        (status = 409, description = "Ad still has offers in flight", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ad(
    State(state): State<AppState>,
    session: Session,
    Path(ad_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ad_service = AdService::new(&state.db);
    ad_service.delete_ad(user.id, ad_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

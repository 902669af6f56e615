use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dating::{DatingPageDto, DiscoverQuery, MatchDto, SwipeDto, SwipeResultDto, UpsertDatingPageDto},
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::dating::DatingService,
    },
};

pub static DATING_TAG: &str = "dating";

/// Create or update the logged in user's dating profile
#[utoipa::path(
    put,
    path = "/api/dating/page",
    tag = DATING_TAG,
    request_body = UpsertDatingPageDto,
    responses(
        (status = 200, description = "Profile updated", body = DatingPageDto),
        (status = 201, description = "Profile created", body = DatingPageDto),
        (status = 400, description = "Age or display name out of bounds", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_dating_page(
    State(state): State<AppState>,
    session: Session,
    Json(page): Json<UpsertDatingPageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let dating_service = DatingService::new(&state.db);
    let (page, created) = dating_service.upsert_page(user.id, page).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(page)))
}

/// Get the logged in user's dating profile
#[utoipa::path(
    get,
    path = "/api/dating/page",
    tag = DATING_TAG,
    responses(
        (status = 200, description = "The user's dating profile", body = DatingPageDto),
        (status = 404, description = "No dating profile exists yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dating_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let dating_service = DatingService::new(&state.db);
    let page = dating_service.get_own_page(user.id).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Browse candidate profiles the user has not swiped on yet
#[utoipa::path(
    get,
    path = "/api/dating/discover",
    tag = DATING_TAG,
    params(DiscoverQuery),
    responses(
        (status = 200, description = "Candidate profiles", body = Vec<DatingPageDto>),
        (status = 404, description = "The user has no dating profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn discover_dating_pages(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DiscoverQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let dating_service = DatingService::new(&state.db);
    let pages = dating_service.discover(user.id, query).await?;

    Ok((StatusCode::OK, Json(pages)))
}

/// Swipe on a profile
///
/// A reciprocal like creates a match with its chat and returns both.
#[utoipa::path(
    post,
    path = "/api/dating/swipe",
    tag = DATING_TAG,
    request_body = SwipeDto,
    responses(
        (status = 200, description = "Swipe recorded, with the match when one formed", body = SwipeResultDto),
        (status = 400, description = "Swiped on your own profile", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 409, description = "Already swiped on this profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn swipe_dating_page(
    State(state): State<AppState>,
    session: Session,
    Json(swipe): Json<SwipeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let dating_service = DatingService::new(&state.db);
    let result = dating_service.swipe(user.id, swipe).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// List the logged in user's matches, newest first
#[utoipa::path(
    get,
    path = "/api/dating/matches",
    tag = DATING_TAG,
    responses(
        (status = 200, description = "The user's matches", body = Vec<MatchDto>),
        (status = 404, description = "The user has no dating profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_dating_matches(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let dating_service = DatingService::new(&state.db);
    let matches = dating_service.list_matches(user.id).await?;

    Ok((StatusCode::OK, Json(matches)))
}

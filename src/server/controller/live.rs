use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        live::{
            LiveNowDto, LiveStreamDto, LiveStreamPageDetailDto, LiveStreamPageDto, StartStreamDto,
            StreamTokenDto, UpsertLiveStreamPageDto,
        },
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::live::LiveService,
    },
};

pub static LIVE_TAG: &str = "live";

/// Create or update the logged in user's channel page
#[utoipa::path(
    put,
    path = "/api/live/page",
    tag = LIVE_TAG,
    request_body = UpsertLiveStreamPageDto,
    responses(
        (status = 200, description = "Channel page updated", body = LiveStreamPageDto),
        (status = 201, description = "Channel page created", body = LiveStreamPageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_live_page(
    State(state): State<AppState>,
    session: Session,
    Json(page): Json<UpsertLiveStreamPageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let live_service = LiveService::new(&state.db, &state.sfu);
    let (page, created) = live_service.upsert_page(user.id, page).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(page)))
}

/// Get a channel page plus its current live stream, when one exists
#[utoipa::path(
    get,
    path = "/api/live/pages/{page_id}",
    tag = LIVE_TAG,
    params(("page_id" = i32, Path, description = "ID of the channel page")),
    responses(
        (status = 200, description = "The requested channel", body = LiveStreamPageDetailDto),
        (status = 404, description = "Channel page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_live_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let live_service = LiveService::new(&state.db, &state.sfu);
    let page = live_service.get_page_detail(page_id).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// List currently-live streams, most recently started first
#[utoipa::path(
    get,
    path = "/api/live/now",
    tag = LIVE_TAG,
    responses(
        (status = 200, description = "Currently live streams", body = Vec<LiveNowDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_live_now(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let live_service = LiveService::new(&state.db, &state.sfu);
    let streams = live_service.list_live().await?;

    Ok((StatusCode::OK, Json(streams)))
}

/// Go live on the logged in user's channel
///
/// Creates the SFU room and returns the stream with a host token.
#[utoipa::path(
    post,
    path = "/api/live/start",
    tag = LIVE_TAG,
    request_body = StartStreamDto,
    responses(
        (status = 201, description = "Stream started", body = StreamTokenDto),
        (status = 404, description = "No channel page exists yet", body = ErrorDto),
        (status = 409, description = "The channel is already live", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_live_stream(
    State(state): State<AppState>,
    session: Session,
    Json(start): Json<StartStreamDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let live_service = LiveService::new(&state.db, &state.sfu);
    let stream = live_service.start_stream(user.id, start).await?;

    Ok((StatusCode::CREATED, Json(stream)))
}

/// End the logged in user's live stream
#[utoipa::path(
    post,
    path = "/api/live/stop",
    tag = LIVE_TAG,
    responses(
        (status = 200, description = "Stream ended", body = LiveStreamDto),
        (status = 404, description = "Channel page not found", body = ErrorDto),
        (status = 409, description = "The channel is not live", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop_live_stream(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let live_service = LiveService::new(&state.db, &state.sfu);
    let stream = live_service.stop_stream(user.id).await?;

    Ok((StatusCode::OK, Json(stream)))
}

/// Join a live stream as a viewer
#[utoipa::path(
    post,
    path = "/api/live/streams/{stream_id}/join",
    tag = LIVE_TAG,
    params(("stream_id" = i32, Path, description = "ID of the stream")),
    responses(
        (status = 200, description = "Viewer token for the stream", body = StreamTokenDto),
        (status = 404, description = "Stream is not live", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_live_stream(
    State(state): State<AppState>,
    session: Session,
    Path(stream_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let live_service = LiveService::new(&state.db, &state.sfu);
    let token = live_service.join_stream(user.id, stream_id).await?;

    Ok((StatusCode::OK, Json(token)))
}

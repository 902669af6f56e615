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
        event::{CreateEventDto, EventDto, EventListQuery, UpdateEventDto},
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::event::EventService,
    },
};

pub static EVENT_TAG: &str = "events";

/// Create an event organized by the logged in user
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Title out of bounds, or the event ends before it starts", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(event): Json<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event_service = EventService::new(&state.db);
    let event = event_service.create_event(user.id, event).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// List upcoming events, soonest first
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventListQuery),
    responses(
        (status = 200, description = "Upcoming events", body = Vec<EventDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let event_service = EventService::new(&state.db);
    let events = event_service.list_events(query).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Get a single event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "ID of the event")),
    responses(
        (status = 200, description = "The requested event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let event_service = EventService::new(&state.db);
    let event = event_service.get_event(event_id).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Update an event organized by the logged in user
#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "ID of the event")),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Title out of bounds, or the event ends before it starts", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(update): Json<UpdateEventDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event_service = EventService::new(&state.db);
    let event = event_service.update_event(user.id, event_id, update).await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Delete an event organized by the logged in user
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "ID of the event")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event_service = EventService::new(&state.db);
    event_service.delete_event(user.id, event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{PushSubscriptionDto, PushUnsubscribeDto, UpdateProfileDto, UserDto},
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Update the logged in user's profile
///
/// Only fields present in the request change.
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Display name out of bounds", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db);
    let user = user_service.update_profile(user.id, update).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Register a browser push endpoint for the logged in user
///
/// Re-registering a known endpoint re-binds it to the current user.
#[utoipa::path(
    post,
    path = "/api/user/push-subscriptions",
    tag = USER_TAG,
    request_body = PushSubscriptionDto,
    responses(
        (status = 201, description = "Push subscription registered"),
        (status = 400, description = "Empty push endpoint", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe_push(
    State(state): State<AppState>,
    session: Session,
    Json(subscription): Json<PushSubscriptionDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db);
    user_service.subscribe_push(user.id, subscription).await?;

    Ok(StatusCode::CREATED)
}

/// Remove a browser push endpoint for the logged in user
///
/// Removing an unknown endpoint is a no-op.
#[utoipa::path(
    delete,
    path = "/api/user/push-subscriptions",
    tag = USER_TAG,
    request_body = PushUnsubscribeDto,
    responses(
        (status = 204, description = "Push subscription removed"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe_push(
    State(state): State<AppState>,
    session: Session,
    Json(unsubscribe): Json<PushUnsubscribeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user_service = UserService::new(&state.db);
    user_service
        .unsubscribe_push(user.id, &unsubscribe.endpoint)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

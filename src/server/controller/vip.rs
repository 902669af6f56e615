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
        vip::{
            ContentListQuery, CreateVipContentDto, CreateVipPageDto, UpdateVipPageDto,
            VipContentDto, VipPageDetailDto, VipPageDto, VipSubscriptionDto,
        },
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::vip::VipService,
    },
};

pub static VIP_TAG: &str = "vip";

/// Create the logged in user's VIP page
///
/// A user has at most one page and the handle is permanent.
#[utoipa::path(
    post,
    path = "/api/vip/pages",
    tag = VIP_TAG,
    request_body = CreateVipPageDto,
    responses(
        (status = 201, description = "VIP page created", body = VipPageDto),
        (status = 400, description = "Handle or price out of bounds", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "The user already has a page, or the handle is taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vip_page(
    State(state): State<AppState>,
    session: Session,
    Json(page): Json<CreateVipPageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let page = vip_service.create_page(user.id, page).await?;

    Ok((StatusCode::CREATED, Json(page)))
}

/// Update the logged in user's VIP page
#[utoipa::path(
    put,
    path = "/api/vip/page",
    tag = VIP_TAG,
    request_body = UpdateVipPageDto,
    responses(
        (status = 200, description = "VIP page updated", body = VipPageDto),
        (status = 400, description = "Price out of bounds", body = ErrorDto),
        (status = 404, description = "VIP page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vip_page(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UpdateVipPageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let page = vip_service.update_page(user.id, update).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a VIP page's public view
///
/// Includes the content count and whether the caller holds paid access.
#[utoipa::path(
    get,
    path = "/api/vip/pages/{handle}",
    tag = VIP_TAG,
    params(("handle" = String, Path, description = "Handle of the VIP page")),
    responses(
        (status = 200, description = "The requested page", body = VipPageDetailDto),
        (status = 404, description = "VIP page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vip_page(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let page = vip_service.get_page_detail(&handle, user.id).await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Post content to the logged in user's VIP page
#[utoipa::path(
    post,
    path = "/api/vip/page/content",
    tag = VIP_TAG,
    request_body = CreateVipContentDto,
    responses(
        (status = 201, description = "Content posted", body = VipContentDto),
        (status = 404, description = "VIP page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vip_content(
    State(state): State<AppState>,
    session: Session,
    Json(content): Json<CreateVipContentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let content = vip_service.create_content(user.id, content).await?;

    Ok((StatusCode::CREATED, Json(content)))
}

/// Delete content from the logged in user's VIP page
#[utoipa::path(
    delete,
    path = "/api/vip/content/{content_id}",
    tag = VIP_TAG,
    params(("content_id" = i32, Path, description = "ID of the content item")),
    responses(
        (status = 204, description = "Content deleted"),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vip_content(
    State(state): State<AppState>,
    session: Session,
    Path(content_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    vip_service.delete_content(user.id, content_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a VIP page's content, newest first
///
/// The owner and unexpired subscribers see everything; other callers see
/// preview items only.
#[utoipa::path(
    get,
    path = "/api/vip/pages/{handle}/content",
    tag = VIP_TAG,
    params(
        ("handle" = String, Path, description = "Handle of the VIP page"),
        ContentListQuery
    ),
    responses(
        (status = 200, description = "Content visible to the caller", body = Vec<VipContentDto>),
        (status = 404, description = "VIP page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vip_content(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Query(query): Query<ContentListQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let content = vip_service.list_content(&handle, user.id, query).await?;

    Ok((StatusCode::OK, Json(content)))
}

/// Subscribe to a VIP page
///
/// Re-subscribing extends an unexpired period by 30 days and reactivates a
/// cancelled subscription; after expiry a fresh period starts.
#[utoipa::path(
    post,
    path = "/api/vip/pages/{handle}/subscribe",
    tag = VIP_TAG,
    params(("handle" = String, Path, description = "Handle of the VIP page")),
    responses(
        (status = 201, description = "Subscribed", body = VipSubscriptionDto),
        (status = 400, description = "Subscribed to your own page", body = ErrorDto),
        (status = 404, description = "VIP page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe_vip_page(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let subscription = vip_service.subscribe(user.id, &handle).await?;

    Ok((StatusCode::CREATED, Json(subscription)))
}

/// Cancel a subscription to a VIP page
///
/// Access runs to the end of the paid period.
#[utoipa::path(
    post,
    path = "/api/vip/pages/{handle}/unsubscribe",
    tag = VIP_TAG,
    params(("handle" = String, Path, description = "Handle of the VIP page")),
    responses(
        (status = 200, description = "Subscription cancelled", body = VipSubscriptionDto),
        (status = 404, description = "Page or subscription not found", body = ErrorDto),
        (status = 409, description = "Subscription has already expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe_vip_page(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let subscription = vip_service.unsubscribe(user.id, &handle).await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// List the logged in user's subscriptions with their page info
#[utoipa::path(
    get,
    path = "/api/vip/subscriptions",
    tag = VIP_TAG,
    responses(
        (status = 200, description = "The user's subscriptions", body = Vec<VipSubscriptionDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_vip_subscriptions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let vip_service = VipService::new(&state.db);
    let subscriptions = vip_service.list_subscriptions(user.id).await?;

    Ok((StatusCode::OK, Json(subscriptions)))
}

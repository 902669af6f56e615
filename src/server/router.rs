//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router covering every marketplace vertical. Each endpoint is
/// annotated with OpenAPI specifications via utoipa, which are collected into a unified
/// OpenAPI document. The router includes Swagger UI at `/api/docs` for interactive API
/// exploration and testing.
///
/// # Registered Endpoints
/// - `/api/auth/*` - Registration, login, logout, current user
/// - `/api/user/*` - Profile updates and push subscription management
/// - `/api/ads*` - Private ad listings and the offers made against them
/// - `/api/offers*` - Offer lifecycle transitions (accept, reject, cancel,
///   complete, dispute, release)
/// - `/api/dating/*` - Dating pages, discovery, swipes, and matches
/// - `/api/vip/*` - VIP pages, gated content, and subscriptions
/// - `/api/live/*` - Livestream channel pages, broadcasts, and join tokens
/// - `/api/events*` - Community event postings
/// - `/api/jobs*` - Job postings and applications
/// - `/api/chats*` - Direct and match conversations
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and includes:
/// - Endpoint paths and HTTP methods
/// - Request/response schemas
/// - Authentication requirements
/// - Error responses
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged into the
/// main application router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Velvet", description = "Velvet marketplace API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "Profile & push subscription API routes"),
        (name = controller::ad::AD_TAG, description = "Private ad API routes"),
        (name = controller::offer::OFFER_TAG, description = "Offer lifecycle API routes"),
        (name = controller::dating::DATING_TAG, description = "Dating API routes"),
        (name = controller::vip::VIP_TAG, description = "VIP page API routes"),
        (name = controller::live::LIVE_TAG, description = "Livestream API routes"),
        (name = controller::event::EVENT_TAG, description = "Event API routes"),
        (name = controller::job::JOB_TAG, description = "Job board API routes"),
        (name = controller::chat::CHAT_TAG, description = "Messaging API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_auth_user))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(
            controller::user::subscribe_push,
            controller::user::unsubscribe_push
        ))
        .routes(routes!(controller::ad::create_ad, controller::ad::list_ads))
        .routes(routes!(controller::ad::list_own_ads))
        .routes(routes!(
            controller::ad::get_ad,
            controller::ad::update_ad,
            controller::ad::delete_ad
        ))
        .routes(routes!(controller::offer::create_offer))
        .routes(routes!(controller::offer::list_offers))
        .routes(routes!(controller::offer::get_offer))
        .routes(routes!(controller::offer::accept_offer))
        .routes(routes!(controller::offer::reject_offer))
        .routes(routes!(controller::offer::cancel_offer))
        .routes(routes!(controller::offer::complete_offer))
        .routes(routes!(controller::offer::dispute_offer))
        .routes(routes!(controller::offer::release_offer))
        .routes(routes!(
            controller::dating::upsert_dating_page,
            controller::dating::get_dating_page
        ))
        .routes(routes!(controller::dating::discover_dating_pages))
        .routes(routes!(controller::dating::swipe_dating_page))
        .routes(routes!(controller::dating::list_dating_matches))
        .routes(routes!(controller::vip::create_vip_page))
        .routes(routes!(controller::vip::update_vip_page))
        .routes(routes!(controller::vip::get_vip_page))
        .routes(routes!(controller::vip::create_vip_content))
        .routes(routes!(controller::vip::delete_vip_content))
        .routes(routes!(controller::vip::list_vip_content))
        .routes(routes!(controller::vip::subscribe_vip_page))
        .routes(routes!(controller::vip::unsubscribe_vip_page))
        .routes(routes!(controller::vip::list_vip_subscriptions))
        .routes(routes!(controller::live::upsert_live_page))
        .routes(routes!(controller::live::get_live_page))
        .routes(routes!(controller::live::list_live_now))
        .routes(routes!(controller::live::start_live_stream))
        .routes(routes!(controller::live::stop_live_stream))
        .routes(routes!(controller::live::join_live_stream))
        .routes(routes!(
            controller::event::create_event,
            controller::event::list_events
        ))
        .routes(routes!(
            controller::event::get_event,
            controller::event::update_event,
            controller::event::delete_event
        ))
        .routes(routes!(
            controller::job::create_job,
            controller::job::list_jobs
        ))
        .routes(routes!(controller::job::list_own_applications))
        .routes(routes!(controller::job::get_job))
        .routes(routes!(controller::job::apply_to_job))
        .routes(routes!(controller::job::list_job_applications))
        .routes(routes!(controller::job::close_job))
        .routes(routes!(
            controller::chat::open_chat,
            controller::chat::list_chats
        ))
        .routes(routes!(
            controller::chat::list_chat_messages,
            controller::chat::send_chat_message
        ))
        .routes(routes!(controller::chat::mark_chat_read))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

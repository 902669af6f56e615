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
        chat::{
            ChatDto, ChatMessageDto, MarkReadResultDto, MessageListQuery, OpenChatDto,
            SendMessageDto,
        },
    },
    server::{
        controller::util::current_user::get_user_from_session, error::Error, model::app::AppState,
        service::chat::ChatService,
    },
};

pub static CHAT_TAG: &str = "chats";

/// Open a direct chat with another user
///
/// Returns the existing chat when one is already open between the pair.
#[utoipa::path(
    post,
    path = "/api/chats",
    tag = CHAT_TAG,
    request_body = OpenChatDto,
    responses(
        (status = 200, description = "Existing chat returned", body = ChatDto),
        (status = 201, description = "New chat created", body = ChatDto),
        (status = 400, description = "Opened a chat with yourself", body = ErrorDto),
        (status = 404, description = "Recipient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn open_chat(
    State(state): State<AppState>,
    session: Session,
    Json(open): Json<OpenChatDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let chat_service = ChatService::new(&state.db, &state.realtime, &state.push);
    let (chat, created) = chat_service.open_chat(user.id, open).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(chat)))
}

/// List the logged in user's chats, most recently active first
#[utoipa::path(
    get,
    path = "/api/chats",
    tag = CHAT_TAG,
    responses(
        (status = 200, description = "The user's chats", body = Vec<ChatDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_chats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let chat_service = ChatService::new(&state.db, &state.realtime, &state.push);
    let chats = chat_service.list_chats(user.id).await?;

    Ok((StatusCode::OK, Json(chats)))
}

/// List a chat's messages, newest first
///
/// Pass `before_id` to page into older history. Participants only.
#[utoipa::path(
    get,
    path = "/api/chats/{chat_id}/messages",
    tag = CHAT_TAG,
    params(
        ("chat_id" = i32, Path, description = "ID of the chat"),
        MessageListQuery
    ),
    responses(
        (status = 200, description = "Messages in the chat", body = Vec<ChatMessageDto>),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_chat_messages(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
    Query(query): Query<MessageListQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let chat_service = ChatService::new(&state.db, &state.realtime, &state.push);
    let messages = chat_service.list_messages(user.id, chat_id, query).await?;

    Ok((StatusCode::OK, Json(messages)))
}

/// Send a message into a chat
///
/// The counterpart is notified over the realtime feed and web push;
/// neither delivery failing affects the response.
#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/messages",
    tag = CHAT_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message stored", body = ChatMessageDto),
        (status = 400, description = "Message body out of bounds", body = ErrorDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_chat_message(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
    Json(message): Json<SendMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let chat_service = ChatService::new(&state.db, &state.realtime, &state.push);
    let message = chat_service.send_message(user.id, chat_id, message).await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Mark all counterpart messages in a chat as read
#[utoipa::path(
    post,
    path = "/api/chats/{chat_id}/read",
    tag = CHAT_TAG,
    params(("chat_id" = i32, Path, description = "ID of the chat")),
    responses(
        (status = 200, description = "Messages marked read", body = MarkReadResultDto),
        (status = 404, description = "Chat not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_chat_read(
    State(state): State<AppState>,
    session: Session,
    Path(chat_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let chat_service = ChatService::new(&state.db, &state.realtime, &state.push);
    let result = chat_service.mark_read(user.id, chat_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The other participant of a chat, trimmed to what a conversation list
/// needs to render.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatPeerDto {
    pub id: i32,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl From<entity::velvet_user::Model> for ChatPeerDto {
    fn from(user: entity::velvet_user::Model) -> Self {
        ChatPeerDto {
            id: user.id,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatDto {
    pub id: i32,
    pub origin: String,
    pub counterpart: ChatPeerDto,
    pub last_message: Option<ChatMessageDto>,
    pub unread_count: u64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChatMessageDto {
    pub id: i32,
    pub chat_id: i32,
    pub sender_id: i32,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub read_at: Option<NaiveDateTime>,
}

impl From<entity::chat_message::Model> for ChatMessageDto {
    fn from(message: entity::chat_message::Model) -> Self {
        ChatMessageDto {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            body: message.body,
            created_at: message.created_at,
            read_at: message.read_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OpenChatDto {
    pub recipient_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SendMessageDto {
    pub body: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarkReadResultDto {
    pub updated: u64,
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct MessageListQuery {
    /// Return messages older than this message id.
    pub before_id: Option<i32>,
    pub limit: Option<u64>,
}

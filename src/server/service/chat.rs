//! Two-party chat service layer.
//!
//! This module contains business logic for direct and match conversations.
//! The message row is the source of truth; the realtime publish and the
//! push notification that follow a send are best-effort fan-out and never
//! fail the request.

use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::chat::{
        ChatDto, ChatMessageDto, MarkReadResultDto, MessageListQuery, OpenChatDto, SendMessageDto,
    },
    server::{
        data::{
            chat::{message::MessageRepository, ChatRepository},
            user::UserRepository,
        },
        error::Error,
        integration::{PushClient, RealtimeClient},
        model::db::ChatModel,
        service::notify,
    },
};
use entity::chat::ChatOrigin;

const DEFAULT_MESSAGE_LIMIT: u64 = 50;
const MAX_MESSAGE_LIMIT: u64 = 100;

/// Service for two-party conversations and their messages.
pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
    realtime: &'a RealtimeClient,
    push: &'a PushClient,
}

impl<'a> ChatService<'a> {
    /// Creates a new instance of ChatService.
    pub fn new(
        db: &'a DatabaseConnection,
        realtime: &'a RealtimeClient,
        push: &'a PushClient,
    ) -> Self {
        Self { db, realtime, push }
    }

    /// Opens a direct chat with another user, reusing an existing one.
    ///
    /// # Returns
    /// - `Ok((ChatDto, true))` - Fresh chat created
    /// - `Ok((ChatDto, false))` - Existing chat returned
    /// - `Err(Error::ValidationError)` - Recipient is the caller
    /// - `Err(Error::NotFound)` - Recipient does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn open_chat(
        &self,
        user_id: i32,
        open: OpenChatDto,
    ) -> Result<(ChatDto, bool), Error> {
        if open.recipient_id == user_id {
            return Err(Error::ValidationError(
                "You cannot open a chat with yourself".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.get(open.recipient_id).await?.is_none() {
            return Err(Error::NotFound("User not found".to_string()));
        }

        let chat_repo = ChatRepository::new(self.db);
        let (chat, created) = match chat_repo
            .get_by_pair(user_id, open.recipient_id, ChatOrigin::Direct)
            .await?
        {
            Some(chat) => (chat, false),
            None => {
                let chat = chat_repo
                    .create(user_id, open.recipient_id, ChatOrigin::Direct)
                    .await?;
                (chat, true)
            }
        };

        let chat = self.build_chat_dto(chat, user_id).await?;

        Ok((chat, created))
    }

    /// Lists the user's chats, most recently active first.
    ///
    /// Chats that never saw a message sort after every active one.
    pub async fn list_chats(&self, user_id: i32) -> Result<Vec<ChatDto>, Error> {
        let chat_repo = ChatRepository::new(self.db);
        let mut chats = chat_repo.list_for_user(user_id).await?;

        chats.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));

        let mut result = Vec::with_capacity(chats.len());
        for chat in chats {
            result.push(self.build_chat_dto(chat, user_id).await?);
        }

        Ok(result)
    }

    /// Sends a message into a chat the user takes part in.
    ///
    /// Writes the row and bumps the chat's activity timestamp, then fans out
    /// a realtime event and a push notification to the counterpart. Both are
    /// best-effort; the sender only ever sees the stored message.
    ///
    /// # Returns
    /// - `Ok(ChatMessageDto)` - Message stored
    /// - `Err(Error::NotFound)` - Chat missing or caller is not a participant
    /// - `Err(Error::ValidationError)` - Body empty or too long
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn send_message(
        &self,
        user_id: i32,
        chat_id: i32,
        message: SendMessageDto,
    ) -> Result<ChatMessageDto, Error> {
        let chat = self.get_for_participant(chat_id, user_id).await?;

        let body_length = message.body.chars().count();
        if !(1..=4000).contains(&body_length) {
            return Err(Error::ValidationError(
                "Message must be between 1 and 4000 characters".to_string(),
            ));
        }

        let message_repo = MessageRepository::new(self.db);
        let message = message_repo.create(chat.id, user_id, message.body).await?;

        let counterpart_id = if chat.user_a_id == user_id {
            chat.user_b_id
        } else {
            chat.user_a_id
        };

        let chat_repo = ChatRepository::new(self.db);
        chat_repo.touch_last_message(chat, message.created_at).await?;

        let message_dto = ChatMessageDto::from(message);

        let topic = format!("chat:{}", chat_id);
        match serde_json::to_value(&message_dto) {
            Ok(payload) => {
                if let Err(err) = self.realtime.publish(&topic, "message.created", payload).await {
                    tracing::warn!(
                        "Failed to publish message event for chat ID {}: {}",
                        chat_id,
                        err
                    );
                }
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to serialize message event for chat ID {}: {}",
                    chat_id,
                    err
                );
            }
        }

        notify::push_to_user(
            self.db,
            self.push,
            counterpart_id,
            "New message",
            "You have a new message.",
        )
        .await;

        Ok(message_dto)
    }

    /// Lists messages in a chat, newest first, keyset-paginated.
    pub async fn list_messages(
        &self,
        user_id: i32,
        chat_id: i32,
        query: MessageListQuery,
    ) -> Result<Vec<ChatMessageDto>, Error> {
        let chat = self.get_for_participant(chat_id, user_id).await?;

        let limit = query
            .limit
            .unwrap_or(DEFAULT_MESSAGE_LIMIT)
            .clamp(1, MAX_MESSAGE_LIMIT);

        let message_repo = MessageRepository::new(self.db);
        let messages = message_repo.list(chat.id, query.before_id, limit).await?;

        Ok(messages.into_iter().map(ChatMessageDto::from).collect())
    }

    /// Marks every counterpart message in a chat as read.
    pub async fn mark_read(
        &self,
        user_id: i32,
        chat_id: i32,
    ) -> Result<MarkReadResultDto, Error> {
        let chat = self.get_for_participant(chat_id, user_id).await?;

        let message_repo = MessageRepository::new(self.db);
        let updated = message_repo
            .mark_read(chat.id, user_id, Utc::now().naive_utc())
            .await?;

        Ok(MarkReadResultDto { updated })
    }

    /// Loads a chat for a user who must be one of its two participants.
    ///
    /// Outsiders get the same 404 a missing chat produces.
    async fn get_for_participant(&self, chat_id: i32, user_id: i32) -> Result<ChatModel, Error> {
        let chat_repo = ChatRepository::new(self.db);

        let Some(chat) = chat_repo.get(chat_id).await? else {
            return Err(Error::NotFound("Chat not found".to_string()));
        };
        if chat.user_a_id != user_id && chat.user_b_id != user_id {
            return Err(Error::NotFound("Chat not found".to_string()));
        }

        Ok(chat)
    }

    /// Assembles the conversation list view of a chat for one participant.
    async fn build_chat_dto(&self, chat: ChatModel, viewer_id: i32) -> Result<ChatDto, Error> {
        let counterpart_id = if chat.user_a_id == viewer_id {
            chat.user_b_id
        } else {
            chat.user_a_id
        };

        let user_repo = UserRepository::new(self.db);
        let Some(counterpart) = user_repo.get(counterpart_id).await? else {
            return Err(Error::InternalError(format!(
                "Chat ID {} references missing user ID {}",
                chat.id, counterpart_id
            )));
        };

        let message_repo = MessageRepository::new(self.db);
        let last_message = message_repo.latest(chat.id).await?;
        let unread_count = message_repo.count_unread(chat.id, viewer_id).await?;

        Ok(ChatDto {
            id: chat.id,
            origin: chat.origin.to_value(),
            counterpart: counterpart.into(),
            last_message: last_message.map(ChatMessageDto::from),
            unread_count,
            created_at: chat.created_at,
        })
    }
}

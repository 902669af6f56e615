//! Chat fixture utilities.

use chrono::Utc;
use entity::chat::ChatOrigin;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ChatMessageModel, ChatModel},
    TestSetup,
};

impl TestSetup {
    pub fn chat<'a>(&'a mut self) -> ChatFixtures<'a> {
        ChatFixtures { setup: self }
    }
}

pub struct ChatFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> ChatFixtures<'a> {
    pub async fn insert_direct_chat(
        &self,
        user_a_id: i32,
        user_b_id: i32,
    ) -> Result<ChatModel, TestError> {
        self.insert_chat(user_a_id, user_b_id, ChatOrigin::Direct)
            .await
    }

    pub async fn insert_match_chat(
        &self,
        user_a_id: i32,
        user_b_id: i32,
    ) -> Result<ChatModel, TestError> {
        self.insert_chat(user_a_id, user_b_id, ChatOrigin::Match)
            .await
    }

    pub async fn insert_message(
        &self,
        chat_id: i32,
        sender_id: i32,
        body: &str,
    ) -> Result<ChatMessageModel, TestError> {
        Ok(
            entity::prelude::ChatMessage::insert(entity::chat_message::ActiveModel {
                chat_id: ActiveValue::Set(chat_id),
                sender_id: ActiveValue::Set(sender_id),
                body: ActiveValue::Set(body.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                read_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Chats store the pair with the lower user id first, same as the
    /// application does.
    async fn insert_chat(
        &self,
        user_a_id: i32,
        user_b_id: i32,
        origin: ChatOrigin,
    ) -> Result<ChatModel, TestError> {
        let (low, high) = if user_a_id <= user_b_id {
            (user_a_id, user_b_id)
        } else {
            (user_b_id, user_a_id)
        };

        Ok(entity::prelude::Chat::insert(entity::chat::ActiveModel {
            user_a_id: ActiveValue::Set(low),
            user_b_id: ActiveValue::Set(high),
            origin: ActiveValue::Set(origin),
            last_message_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}

//! Messaging data repositories.
//!
//! This module contains repositories for two-party chats and their messages.
//! A user pair is stored with the lower ID first and can hold one chat per
//! origin, so a dating match does not merge into an existing direct thread.

pub mod message;

use chrono::{NaiveDateTime, Utc};
use entity::chat::ChatOrigin;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Orders a user pair the way chat rows store it, lower ID first.
fn normalize_pair(user_one_id: i32, user_two_id: i32) -> (i32, i32) {
    if user_one_id < user_two_id {
        (user_one_id, user_two_id)
    } else {
        (user_two_id, user_one_id)
    }
}

pub struct ChatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatRepository<'a, C> {
    /// Creates a new instance of [`ChatRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_one_id: i32,
        user_two_id: i32,
        origin: ChatOrigin,
    ) -> Result<entity::chat::Model, DbErr> {
        let (user_a_id, user_b_id) = normalize_pair(user_one_id, user_two_id);

        let chat = entity::chat::ActiveModel {
            user_a_id: ActiveValue::Set(user_a_id),
            user_b_id: ActiveValue::Set(user_b_id),
            origin: ActiveValue::Set(origin),
            last_message_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        chat.insert(self.db).await
    }

    pub async fn get(&self, chat_id: i32) -> Result<Option<entity::chat::Model>, DbErr> {
        entity::prelude::Chat::find_by_id(chat_id).one(self.db).await
    }

    /// Looks up the chat between two users for an origin, if one exists
    pub async fn get_by_pair(
        &self,
        user_one_id: i32,
        user_two_id: i32,
        origin: ChatOrigin,
    ) -> Result<Option<entity::chat::Model>, DbErr> {
        let (user_a_id, user_b_id) = normalize_pair(user_one_id, user_two_id);

        entity::prelude::Chat::find()
            .filter(entity::chat::Column::UserAId.eq(user_a_id))
            .filter(entity::chat::Column::UserBId.eq(user_b_id))
            .filter(entity::chat::Column::Origin.eq(origin))
            .one(self.db)
            .await
    }

    /// Lists every chat a user takes part in
    ///
    /// Ordering by latest activity is left to the caller; SQL backends do not
    /// agree on where null `last_message_at` rows sort.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<entity::chat::Model>, DbErr> {
        entity::prelude::Chat::find()
            .filter(
                Condition::any()
                    .add(entity::chat::Column::UserAId.eq(user_id))
                    .add(entity::chat::Column::UserBId.eq(user_id)),
            )
            .all(self.db)
            .await
    }

    /// Bumps a chat's activity timestamp after a message lands in it
    pub async fn touch_last_message(
        &self,
        chat: entity::chat::Model,
        at: NaiveDateTime,
    ) -> Result<entity::chat::Model, DbErr> {
        let mut chat_am = chat.into_active_model();
        chat_am.last_message_at = ActiveValue::Set(Some(at));

        chat_am.update(self.db).await
    }
}

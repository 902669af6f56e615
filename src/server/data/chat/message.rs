use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use migration::Expr;

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        chat_id: i32,
        sender_id: i32,
        body: String,
    ) -> Result<entity::chat_message::Model, DbErr> {
        let message = entity::chat_message::ActiveModel {
            chat_id: ActiveValue::Set(chat_id),
            sender_id: ActiveValue::Set(sender_id),
            body: ActiveValue::Set(body),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            read_at: ActiveValue::Set(None),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    /// Lists a chat's messages newest first, keyed by message ID
    ///
    /// With `before_id` set only messages older than that ID come back, which
    /// is how clients page into history.
    pub async fn list(
        &self,
        chat_id: i32,
        before_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::chat_message::Model>, DbErr> {
        let mut query = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::ChatId.eq(chat_id));

        if let Some(before_id) = before_id {
            query = query.filter(entity::chat_message::Column::Id.lt(before_id));
        }

        query
            .order_by_desc(entity::chat_message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Fetches the most recent message in a chat, if any
    pub async fn latest(
        &self,
        chat_id: i32,
    ) -> Result<Option<entity::chat_message::Model>, DbErr> {
        entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::ChatId.eq(chat_id))
            .order_by_desc(entity::chat_message::Column::Id)
            .one(self.db)
            .await
    }

    /// Counts messages the reader has not seen yet
    ///
    /// Only the other party's messages count; your own are born read from
    /// your point of view.
    pub async fn count_unread(&self, chat_id: i32, reader_id: i32) -> Result<u64, DbErr> {
        entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::ChatId.eq(chat_id))
            .filter(entity::chat_message::Column::SenderId.ne(reader_id))
            .filter(entity::chat_message::Column::ReadAt.is_null())
            .count(self.db)
            .await
    }

    /// Marks the counterpart's unread messages as read, returning how many
    /// rows changed
    pub async fn mark_read(
        &self,
        chat_id: i32,
        reader_id: i32,
        read_at: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::ChatMessage::update_many()
            .col_expr(entity::chat_message::Column::ReadAt, Expr::value(read_at))
            .filter(entity::chat_message::Column::ChatId.eq(chat_id))
            .filter(entity::chat_message::Column::SenderId.ne(reader_id))
            .filter(entity::chat_message::Column::ReadAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

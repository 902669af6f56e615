use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct LiveStreamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LiveStreamRepository<'a, C> {
    /// Creates a new instance of [`LiveStreamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Starts a broadcast on a channel
    ///
    /// The room name is the SFU-side identity of the broadcast and must be
    /// unique for its lifetime.
    pub async fn create(
        &self,
        page_id: i32,
        room_name: String,
        title: String,
    ) -> Result<entity::live_stream::Model, DbErr> {
        let stream = entity::live_stream::ActiveModel {
            page_id: ActiveValue::Set(page_id),
            room_name: ActiveValue::Set(room_name),
            title: ActiveValue::Set(title),
            started_at: ActiveValue::Set(Utc::now().naive_utc()),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        };

        stream.insert(self.db).await
    }

    pub async fn get(
        &self,
        stream_id: i32,
    ) -> Result<Option<entity::live_stream::Model>, DbErr> {
        entity::prelude::LiveStream::find_by_id(stream_id)
            .one(self.db)
            .await
    }

    /// Finds the channel's running broadcast, if one is live
    pub async fn get_live_by_page(
        &self,
        page_id: i32,
    ) -> Result<Option<entity::live_stream::Model>, DbErr> {
        entity::prelude::LiveStream::find()
            .filter(entity::live_stream::Column::PageId.eq(page_id))
            .filter(entity::live_stream::Column::EndedAt.is_null())
            .one(self.db)
            .await
    }

    /// Lists every running broadcast with its channel, most recently started
    /// first
    pub async fn list_live(
        &self,
    ) -> Result<
        Vec<(
            entity::live_stream::Model,
            Option<entity::live_stream_page::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::LiveStream::find()
            .find_also_related(entity::live_stream_page::Entity)
            .filter(entity::live_stream::Column::EndedAt.is_null())
            .order_by_desc(entity::live_stream::Column::StartedAt)
            .all(self.db)
            .await
    }

    pub async fn end(
        &self,
        stream: entity::live_stream::Model,
    ) -> Result<entity::live_stream::Model, DbErr> {
        let mut stream_am = stream.into_active_model();
        stream_am.ended_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        stream_am.update(self.db).await
    }
}

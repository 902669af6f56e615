use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::live::UpsertLiveStreamPageDto;

pub struct LiveStreamPageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LiveStreamPageRepository<'a, C> {
    /// Creates a new instance of [`LiveStreamPageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        page: UpsertLiveStreamPageDto,
    ) -> Result<entity::live_stream_page::Model, DbErr> {
        let page = entity::live_stream_page::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            title: ActiveValue::Set(page.title),
            description: ActiveValue::Set(page.description),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        page.insert(self.db).await
    }

    pub async fn get(
        &self,
        page_id: i32,
    ) -> Result<Option<entity::live_stream_page::Model>, DbErr> {
        entity::prelude::LiveStreamPage::find_by_id(page_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Option<entity::live_stream_page::Model>, DbErr> {
        entity::prelude::LiveStreamPage::find()
            .filter(entity::live_stream_page::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        page: entity::live_stream_page::Model,
        update: UpsertLiveStreamPageDto,
    ) -> Result<entity::live_stream_page::Model, DbErr> {
        let mut page_am = page.into_active_model();
        page_am.title = ActiveValue::Set(update.title);
        page_am.description = ActiveValue::Set(update.description);
        page_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        page_am.update(self.db).await
    }
}

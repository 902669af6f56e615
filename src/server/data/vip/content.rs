use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::vip::CreateVipContentDto;

pub struct VipContentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VipContentRepository<'a, C> {
    /// Creates a new instance of [`VipContentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        page_id: i32,
        content: CreateVipContentDto,
    ) -> Result<entity::vip_content::Model, DbErr> {
        let content = entity::vip_content::ActiveModel {
            page_id: ActiveValue::Set(page_id),
            title: ActiveValue::Set(content.title),
            body: ActiveValue::Set(content.body),
            media_url: ActiveValue::Set(content.media_url),
            preview: ActiveValue::Set(content.preview),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        content.insert(self.db).await
    }

    pub async fn get(
        &self,
        content_id: i32,
    ) -> Result<Option<entity::vip_content::Model>, DbErr> {
        entity::prelude::VipContent::find_by_id(content_id)
            .one(self.db)
            .await
    }

    /// Lists a page's posts, newest first
    ///
    /// With `preview_only` set, non-preview posts are held back; that is the
    /// view non-subscribers get.
    pub async fn list_by_page(
        &self,
        page_id: i32,
        preview_only: bool,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::vip_content::Model>, DbErr> {
        let mut query = entity::prelude::VipContent::find()
            .filter(entity::vip_content::Column::PageId.eq(page_id));

        if preview_only {
            query = query.filter(entity::vip_content::Column::Preview.eq(true));
        }

        query
            .order_by_desc(entity::vip_content::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    pub async fn count_by_page(&self, page_id: i32) -> Result<u64, DbErr> {
        entity::prelude::VipContent::find()
            .filter(entity::vip_content::Column::PageId.eq(page_id))
            .count(self.db)
            .await
    }

    /// Deletes a post
    ///
    /// Returns OK regardless of the post existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, content_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::VipContent::delete_by_id(content_id)
            .exec(self.db)
            .await
    }
}

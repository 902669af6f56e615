use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

pub struct SwipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SwipeRepository<'a, C> {
    /// Creates a new instance of [`SwipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        swiper_page_id: i32,
        target_page_id: i32,
        liked: bool,
    ) -> Result<entity::dating_swipe::Model, DbErr> {
        let swipe = entity::dating_swipe::ActiveModel {
            swiper_page_id: ActiveValue::Set(swiper_page_id),
            target_page_id: ActiveValue::Set(target_page_id),
            liked: ActiveValue::Set(liked),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        swipe.insert(self.db).await
    }

    /// Looks up the swipe one page made on another, if any
    pub async fn get_pair(
        &self,
        swiper_page_id: i32,
        target_page_id: i32,
    ) -> Result<Option<entity::dating_swipe::Model>, DbErr> {
        entity::prelude::DatingSwipe::find()
            .filter(entity::dating_swipe::Column::SwiperPageId.eq(swiper_page_id))
            .filter(entity::dating_swipe::Column::TargetPageId.eq(target_page_id))
            .one(self.db)
            .await
    }

    /// Lists the IDs of every page the swiper has already passed judgement on
    pub async fn list_target_ids(&self, swiper_page_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::DatingSwipe::find()
            .filter(entity::dating_swipe::Column::SwiperPageId.eq(swiper_page_id))
            .select_only()
            .column(entity::dating_swipe::Column::TargetPageId)
            .into_tuple()
            .all(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::dating::UpsertDatingPageDto;

pub struct DatingPageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DatingPageRepository<'a, C> {
    /// Creates a new instance of [`DatingPageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        page: UpsertDatingPageDto,
    ) -> Result<entity::dating_page::Model, DbErr> {
        let page = entity::dating_page::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            display_name: ActiveValue::Set(page.display_name),
            age: ActiveValue::Set(page.age),
            gender: ActiveValue::Set(page.gender),
            seeking: ActiveValue::Set(page.seeking),
            bio: ActiveValue::Set(page.bio),
            city: ActiveValue::Set(page.city),
            photo_url: ActiveValue::Set(page.photo_url),
            active: ActiveValue::Set(page.active.unwrap_or(true)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        page.insert(self.db).await
    }

    pub async fn get(&self, page_id: i32) -> Result<Option<entity::dating_page::Model>, DbErr> {
        entity::prelude::DatingPage::find_by_id(page_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::dating_page::Model>, DbErr> {
        entity::prelude::DatingPage::find()
            .filter(entity::dating_page::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Replaces a page's profile fields
    ///
    /// An absent `active` flag keeps the current visibility.
    pub async fn update(
        &self,
        page: entity::dating_page::Model,
        update: UpsertDatingPageDto,
    ) -> Result<entity::dating_page::Model, DbErr> {
        let mut page_am = page.into_active_model();
        page_am.display_name = ActiveValue::Set(update.display_name);
        page_am.age = ActiveValue::Set(update.age);
        page_am.gender = ActiveValue::Set(update.gender);
        page_am.seeking = ActiveValue::Set(update.seeking);
        page_am.bio = ActiveValue::Set(update.bio);
        page_am.city = ActiveValue::Set(update.city);
        page_am.photo_url = ActiveValue::Set(update.photo_url);
        if let Some(active) = update.active {
            page_am.active = ActiveValue::Set(active);
        }
        page_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        page_am.update(self.db).await
    }

    /// Lists active pages the given page has not swiped on yet
    ///
    /// The page's own profile is always excluded. Results come back oldest
    /// profile first so long-standing pages are not starved of exposure.
    pub async fn discover(
        &self,
        own_page_id: i32,
        swiped_page_ids: Vec<i32>,
        city: Option<String>,
        limit: u64,
    ) -> Result<Vec<entity::dating_page::Model>, DbErr> {
        let mut query = entity::prelude::DatingPage::find()
            .filter(entity::dating_page::Column::Active.eq(true))
            .filter(entity::dating_page::Column::Id.ne(own_page_id))
            .filter(entity::dating_page::Column::Id.is_not_in(swiped_page_ids));

        if let Some(city) = city {
            query = query.filter(entity::dating_page::Column::City.eq(city));
        }

        query
            .order_by_asc(entity::dating_page::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}

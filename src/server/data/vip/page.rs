use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::model::vip::{CreateVipPageDto, UpdateVipPageDto};

pub struct VipPageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VipPageRepository<'a, C> {
    /// Creates a new instance of [`VipPageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        page: CreateVipPageDto,
    ) -> Result<entity::vip_page::Model, DbErr> {
        let page = entity::vip_page::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            handle: ActiveValue::Set(page.handle),
            title: ActiveValue::Set(page.title),
            description: ActiveValue::Set(page.description),
            monthly_price_cents: ActiveValue::Set(page.monthly_price_cents),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        page.insert(self.db).await
    }

    pub async fn get(&self, page_id: i32) -> Result<Option<entity::vip_page::Model>, DbErr> {
        entity::prelude::VipPage::find_by_id(page_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_handle(
        &self,
        handle: &str,
    ) -> Result<Option<entity::vip_page::Model>, DbErr> {
        entity::prelude::VipPage::find()
            .filter(entity::vip_page::Column::Handle.eq(handle))
            .one(self.db)
            .await
    }

    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Option<entity::vip_page::Model>, DbErr> {
        entity::prelude::VipPage::find()
            .filter(entity::vip_page::Column::OwnerId.eq(owner_id))
            .one(self.db)
            .await
    }

    /// Updates a page's editable fields
    ///
    /// The handle is fixed at creation; subscribers bookmark it.
    pub async fn update(
        &self,
        page: entity::vip_page::Model,
        update: UpdateVipPageDto,
    ) -> Result<entity::vip_page::Model, DbErr> {
        let mut page_am = page.into_active_model();
        if let Some(title) = update.title {
            page_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = update.description {
            page_am.description = ActiveValue::Set(description);
        }
        if let Some(monthly_price_cents) = update.monthly_price_cents {
            page_am.monthly_price_cents = ActiveValue::Set(monthly_price_cents);
        }
        page_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        page_am.update(self.db).await
    }
}

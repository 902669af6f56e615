use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::ad::{CreatePrivateAdDto, UpdatePrivateAdDto};

pub struct AdRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdRepository<'a, C> {
    /// Creates a new instance of [`AdRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new ad for an owner
    ///
    /// The expiry timestamp is decided by the caller; the listing renewal
    /// policy lives in the service layer.
    pub async fn create(
        &self,
        owner_id: i32,
        ad: CreatePrivateAdDto,
        expires_at: NaiveDateTime,
    ) -> Result<entity::private_ad::Model, DbErr> {
        let ad = entity::private_ad::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            title: ActiveValue::Set(ad.title),
            description: ActiveValue::Set(ad.description),
            category: ActiveValue::Set(ad.category),
            city: ActiveValue::Set(ad.city),
            price_hour_cents: ActiveValue::Set(ad.price_hour_cents),
            cover_url: ActiveValue::Set(ad.cover_url),
            active: ActiveValue::Set(true),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        ad.insert(self.db).await
    }

    pub async fn get(&self, ad_id: i32) -> Result<Option<entity::private_ad::Model>, DbErr> {
        entity::prelude::PrivateAd::find_by_id(ad_id)
            .one(self.db)
            .await
    }

    /// Lists active ads, newest first, optionally narrowed by city and category
    pub async fn list_active(
        &self,
        city: Option<String>,
        category: Option<String>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::private_ad::Model>, DbErr> {
        let mut query = entity::prelude::PrivateAd::find()
            .filter(entity::private_ad::Column::Active.eq(true));

        if let Some(city) = city {
            query = query.filter(entity::private_ad::Column::City.eq(city));
        }
        if let Some(category) = category {
            query = query.filter(entity::private_ad::Column::Category.eq(category));
        }

        query
            .order_by_desc(entity::private_ad::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Lists every ad belonging to an owner, including inactive ones
    pub async fn list_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::private_ad::Model>, DbErr> {
        entity::prelude::PrivateAd::find()
            .filter(entity::private_ad::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::private_ad::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies an edit to an ad and renews its expiry
    pub async fn update(
        &self,
        ad: entity::private_ad::Model,
        update: UpdatePrivateAdDto,
        expires_at: NaiveDateTime,
    ) -> Result<entity::private_ad::Model, DbErr> {
        let mut ad_am = ad.into_active_model();
        if let Some(title) = update.title {
            ad_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = update.description {
            ad_am.description = ActiveValue::Set(description);
        }
        if let Some(category) = update.category {
            ad_am.category = ActiveValue::Set(category);
        }
        if let Some(city) = update.city {
            ad_am.city = ActiveValue::Set(city);
        }
        if let Some(price_hour_cents) = update.price_hour_cents {
            ad_am.price_hour_cents = ActiveValue::Set(price_hour_cents);
        }
        if let Some(cover_url) = update.cover_url {
            ad_am.cover_url = ActiveValue::Set(Some(cover_url));
        }
        if let Some(active) = update.active {
            ad_am.active = ActiveValue::Set(active);
        }
        ad_am.expires_at = ActiveValue::Set(expires_at);
        ad_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        ad_am.update(self.db).await
    }

    /// Marks an ad inactive without touching any of its content
    pub async fn deactivate(
        &self,
        ad: entity::private_ad::Model,
    ) -> Result<entity::private_ad::Model, DbErr> {
        let mut ad_am = ad.into_active_model();
        ad_am.active = ActiveValue::Set(false);
        ad_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        ad_am.update(self.db).await
    }

    /// Deletes an ad
    ///
    /// Returns OK regardless of the ad existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, ad_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PrivateAd::delete_by_id(ad_id)
            .exec(self.db)
            .await
    }
}

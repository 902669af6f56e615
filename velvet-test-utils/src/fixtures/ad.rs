//! Private ad fixture utilities.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, model::PrivateAdModel, TestSetup};

impl TestSetup {
    pub fn ads<'a>(&'a mut self) -> AdFixtures<'a> {
        AdFixtures { setup: self }
    }
}

pub struct AdFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AdFixtures<'a> {
    /// Insert an active ad expiring 30 days out.
    pub async fn insert_ad(
        &self,
        owner_id: i32,
        city: &str,
        category: &str,
    ) -> Result<PrivateAdModel, TestError> {
        Ok(
            entity::prelude::PrivateAd::insert(entity::private_ad::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                title: ActiveValue::Set("Evening companionship".to_string()),
                description: ActiveValue::Set("Available weekday evenings.".to_string()),
                category: ActiveValue::Set(category.to_string()),
                city: ActiveValue::Set(city.to_string()),
                price_hour_cents: ActiveValue::Set(25_000),
                cover_url: ActiveValue::Set(None),
                active: ActiveValue::Set(true),
                expires_at: ActiveValue::Set(Utc::now().naive_utc() + Duration::days(30)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn get_ad(&self, ad_id: i32) -> Result<PrivateAdModel, TestError> {
        Ok(entity::prelude::PrivateAd::find_by_id(ad_id)
            .one(&self.setup.state.db)
            .await?
            .expect("ad fixture not found"))
    }

    pub async fn deactivate_ad(&self, ad_id: i32) -> Result<(), TestError> {
        entity::private_ad::ActiveModel {
            id: ActiveValue::Set(ad_id),
            active: ActiveValue::Set(false),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }

    /// Move an ad's expiry, typically into the past to simulate a lapsed
    /// listing.
    pub async fn backdate_ad_expiry(
        &self,
        ad_id: i32,
        expires_at: chrono::NaiveDateTime,
    ) -> Result<(), TestError> {
        entity::private_ad::ActiveModel {
            id: ActiveValue::Set(ad_id),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }
}

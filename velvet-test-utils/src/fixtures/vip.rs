//! VIP page, content and subscription fixture utilities.

use chrono::{Duration, Utc};
use entity::vip_subscription::SubscriptionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{VipContentModel, VipPageModel, VipSubscriptionModel},
    TestSetup,
};

impl TestSetup {
    pub fn vip<'a>(&'a mut self) -> VipFixtures<'a> {
        VipFixtures { setup: self }
    }
}

pub struct VipFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> VipFixtures<'a> {
    pub async fn insert_page(
        &self,
        owner_id: i32,
        handle: &str,
    ) -> Result<VipPageModel, TestError> {
        Ok(entity::prelude::VipPage::insert(entity::vip_page::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            handle: ActiveValue::Set(handle.to_string()),
            title: ActiveValue::Set("Backstage".to_string()),
            description: ActiveValue::Set("Weekly photo sets and diaries.".to_string()),
            monthly_price_cents: ActiveValue::Set(1_500),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_content(
        &self,
        page_id: i32,
        preview: bool,
    ) -> Result<VipContentModel, TestError> {
        Ok(
            entity::prelude::VipContent::insert(entity::vip_content::ActiveModel {
                page_id: ActiveValue::Set(page_id),
                title: ActiveValue::Set("Set #1".to_string()),
                body: ActiveValue::Set("Behind the scenes from last weekend.".to_string()),
                media_url: ActiveValue::Set(None),
                preview: ActiveValue::Set(preview),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert an active subscription with a full 30-day period ahead of it.
    pub async fn insert_subscription(
        &self,
        page_id: i32,
        subscriber_id: i32,
    ) -> Result<VipSubscriptionModel, TestError> {
        Ok(
            entity::prelude::VipSubscription::insert(entity::vip_subscription::ActiveModel {
                page_id: ActiveValue::Set(page_id),
                subscriber_id: ActiveValue::Set(subscriber_id),
                status: ActiveValue::Set(SubscriptionStatus::Active),
                current_period_end: ActiveValue::Set(Utc::now().naive_utc() + Duration::days(30)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn get_subscription(
        &self,
        subscription_id: i32,
    ) -> Result<VipSubscriptionModel, TestError> {
        Ok(entity::prelude::VipSubscription::find_by_id(subscription_id)
            .one(&self.setup.state.db)
            .await?
            .expect("subscription fixture not found"))
    }

    pub async fn cancel_subscription(&self, subscription_id: i32) -> Result<(), TestError> {
        self.set_subscription_status(subscription_id, SubscriptionStatus::Cancelled)
            .await
    }

    pub async fn expire_subscription(&self, subscription_id: i32) -> Result<(), TestError> {
        self.set_subscription_status(subscription_id, SubscriptionStatus::Expired)
            .await
    }

    pub async fn set_subscription_period_end(
        &self,
        subscription_id: i32,
        current_period_end: chrono::NaiveDateTime,
    ) -> Result<(), TestError> {
        entity::vip_subscription::ActiveModel {
            id: ActiveValue::Set(subscription_id),
            current_period_end: ActiveValue::Set(current_period_end),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }

    async fn set_subscription_status(
        &self,
        subscription_id: i32,
        status: SubscriptionStatus,
    ) -> Result<(), TestError> {
        entity::vip_subscription::ActiveModel {
            id: ActiveValue::Set(subscription_id),
            status: ActiveValue::Set(status),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }
}

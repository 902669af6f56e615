use chrono::{NaiveDateTime, Utc};
use entity::vip_subscription::SubscriptionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct VipSubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VipSubscriptionRepository<'a, C> {
    /// Creates a new instance of [`VipSubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        page_id: i32,
        subscriber_id: i32,
        current_period_end: NaiveDateTime,
    ) -> Result<entity::vip_subscription::Model, DbErr> {
        let subscription = entity::vip_subscription::ActiveModel {
            page_id: ActiveValue::Set(page_id),
            subscriber_id: ActiveValue::Set(subscriber_id),
            status: ActiveValue::Set(SubscriptionStatus::Active),
            current_period_end: ActiveValue::Set(current_period_end),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        subscription.insert(self.db).await
    }

    pub async fn get(
        &self,
        subscription_id: i32,
    ) -> Result<Option<entity::vip_subscription::Model>, DbErr> {
        entity::prelude::VipSubscription::find_by_id(subscription_id)
            .one(self.db)
            .await
    }

    /// Looks up a subscriber's subscription to a page, if any
    ///
    /// At most one row exists per pair; renewals update it in place.
    pub async fn get_pair(
        &self,
        page_id: i32,
        subscriber_id: i32,
    ) -> Result<Option<entity::vip_subscription::Model>, DbErr> {
        entity::prelude::VipSubscription::find()
            .filter(entity::vip_subscription::Column::PageId.eq(page_id))
            .filter(entity::vip_subscription::Column::SubscriberId.eq(subscriber_id))
            .one(self.db)
            .await
    }

    pub async fn update(
        &self,
        subscription: entity::vip_subscription::Model,
        status: SubscriptionStatus,
        current_period_end: NaiveDateTime,
    ) -> Result<entity::vip_subscription::Model, DbErr> {
        let mut subscription_am = subscription.into_active_model();
        subscription_am.status = ActiveValue::Set(status);
        subscription_am.current_period_end = ActiveValue::Set(current_period_end);
        subscription_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        subscription_am.update(self.db).await
    }

    /// Lists a user's subscriptions with their pages, newest first
    pub async fn list_by_subscriber(
        &self,
        subscriber_id: i32,
    ) -> Result<
        Vec<(
            entity::vip_subscription::Model,
            Option<entity::vip_page::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::VipSubscription::find()
            .find_also_related(entity::vip_page::Entity)
            .filter(entity::vip_subscription::Column::SubscriberId.eq(subscriber_id))
            .order_by_desc(entity::vip_subscription::Column::CreatedAt)
            .all(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct PushSubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PushSubscriptionRepository<'a, C> {
    /// Creates a new instance of [`PushSubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a push subscription, replacing any existing registration for
    /// the same endpoint
    ///
    /// Browsers reuse endpoints across sessions, so a resubmitted endpoint is
    /// rebound to the submitting user rather than rejected.
    pub async fn upsert(
        &self,
        user_id: i32,
        endpoint: String,
        p256dh: String,
        auth: String,
    ) -> Result<entity::push_subscription::Model, DbErr> {
        let existing = entity::prelude::PushSubscription::find()
            .filter(entity::push_subscription::Column::Endpoint.eq(&endpoint))
            .one(self.db)
            .await?;

        match existing {
            Some(subscription) => {
                let mut subscription_am = subscription.into_active_model();
                subscription_am.user_id = ActiveValue::Set(user_id);
                subscription_am.p256dh = ActiveValue::Set(p256dh);
                subscription_am.auth = ActiveValue::Set(auth);

                subscription_am.update(self.db).await
            }
            None => {
                let subscription = entity::push_subscription::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    endpoint: ActiveValue::Set(endpoint),
                    p256dh: ActiveValue::Set(p256dh),
                    auth: ActiveValue::Set(auth),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };

                subscription.insert(self.db).await
            }
        }
    }

    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::push_subscription::Model>, DbErr> {
        entity::prelude::PushSubscription::find()
            .filter(entity::push_subscription::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Removes a user's subscription for an endpoint
    ///
    /// Returns OK regardless of the subscription existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_endpoint(
        &self,
        user_id: i32,
        endpoint: &str,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::PushSubscription::delete_many()
            .filter(entity::push_subscription::Column::UserId.eq(user_id))
            .filter(entity::push_subscription::Column::Endpoint.eq(endpoint))
            .exec(self.db)
            .await
    }
}

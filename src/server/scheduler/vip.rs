use apalis::prelude::*;
use apalis_redis::RedisStorage;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{error::Error, model::worker::WorkerJob, scheduler::config::vip_subscription};

/// Finds VIP subscriptions past their paid period & enqueues an expiry job for each
// The enqueue path is untested because apalis requires a live redis instance
// and has no sqlite-backed storage to run against.
pub async fn schedule_subscription_expiries(
    db: &DatabaseConnection,
    job_storage: &mut RedisStorage<WorkerJob>,
) -> Result<usize, Error> {
    let now = Utc::now().naive_utc();
    let subscription_ids =
        find_subscriptions_due_expiry(db, now, vip_subscription::BATCH_LIMIT).await?;

    if subscription_ids.is_empty() {
        return Ok(0);
    }

    for subscription_id in &subscription_ids {
        job_storage
            .push(WorkerJob::ExpireSubscription {
                subscription_id: *subscription_id,
            })
            .await?;
    }

    Ok(subscription_ids.len())
}

/// Finds active or cancelled subscriptions whose paid period has run out
///
/// Cancelled subscriptions keep access until their period end, so they lapse
/// through the same scan as active ones.
async fn find_subscriptions_due_expiry(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    limit: u64,
) -> Result<Vec<i32>, sea_orm::DbErr> {
    entity::prelude::VipSubscription::find()
        .filter(entity::vip_subscription::Column::Status.is_in([
            entity::vip_subscription::SubscriptionStatus::Active,
            entity::vip_subscription::SubscriptionStatus::Cancelled,
        ]))
        .filter(entity::vip_subscription::Column::CurrentPeriodEnd.lte(now))
        .order_by_asc(entity::vip_subscription::Column::CurrentPeriodEnd)
        .limit(limit)
        .select_only()
        .column(entity::vip_subscription::Column::Id)
        .into_tuple()
        .all(db)
        .await
}

use apalis::prelude::*;
use apalis_redis::RedisStorage;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{error::Error, model::worker::WorkerJob, scheduler::config::ad_expiry};

/// Finds active ads past their expiry date & enqueues a deactivation job for each
// The enqueue path is untested because apalis requires a live redis instance
// and has no sqlite-backed storage to run against.
pub async fn schedule_ad_deactivations(
    db: &DatabaseConnection,
    job_storage: &mut RedisStorage<WorkerJob>,
) -> Result<usize, Error> {
    let now = Utc::now().naive_utc();
    let ad_ids = find_ads_due_deactivation(db, now, ad_expiry::BATCH_LIMIT).await?;

    if ad_ids.is_empty() {
        return Ok(0);
    }

    for ad_id in &ad_ids {
        job_storage
            .push(WorkerJob::DeactivateAd { ad_id: *ad_id })
            .await?;
    }

    Ok(ad_ids.len())
}

/// Finds active ads whose expiry date has passed
async fn find_ads_due_deactivation(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    limit: u64,
) -> Result<Vec<i32>, sea_orm::DbErr> {
    entity::prelude::PrivateAd::find()
        .filter(entity::private_ad::Column::Active.eq(true))
        .filter(entity::private_ad::Column::ExpiresAt.lte(now))
        .order_by_asc(entity::private_ad::Column::ExpiresAt)
        .limit(limit)
        .select_only()
        .column(entity::private_ad::Column::Id)
        .into_tuple()
        .all(db)
        .await
}

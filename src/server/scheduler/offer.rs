use apalis::prelude::*;
use apalis_redis::RedisStorage;
use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::Error, model::worker::WorkerJob, scheduler::config::offer_release,
    service::offer::DISPUTE_WINDOW_HOURS,
};

/// Finds confirmed offers whose dispute window has lapsed & enqueues a release job for each
// The enqueue path is untested because apalis requires a live redis instance
// and has no sqlite-backed storage to run against.
pub async fn schedule_offer_releases(
    db: &DatabaseConnection,
    job_storage: &mut RedisStorage<WorkerJob>,
) -> Result<usize, Error> {
    let now = Utc::now().naive_utc();
    let offer_ids = find_offers_due_release(db, now, offer_release::BATCH_LIMIT).await?;

    if offer_ids.is_empty() {
        return Ok(0);
    }

    for offer_id in &offer_ids {
        job_storage
            .push(WorkerJob::ReleaseOffer {
                offer_id: *offer_id,
            })
            .await?;
    }

    Ok(offer_ids.len())
}

/// Finds confirmed offers completed longer ago than the dispute window
///
/// Oldest completions first, so a backlog drains in deadline order across
/// successive scans.
async fn find_offers_due_release(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    limit: u64,
) -> Result<Vec<i32>, sea_orm::DbErr> {
    let release_threshold = now - Duration::hours(DISPUTE_WINDOW_HOURS);

    entity::prelude::PrivateOffer::find()
        .filter(
            entity::private_offer::Column::Status.eq(entity::private_offer::OfferStatus::Confirmed),
        )
        .filter(entity::private_offer::Column::CompletedAt.lte(release_threshold))
        .order_by_asc(entity::private_offer::Column::CompletedAt)
        .limit(limit)
        .select_only()
        .column(entity::private_offer::Column::Id)
        .into_tuple()
        .all(db)
        .await
}

//! Cron scheduler for marketplace lifecycle deadlines.
//!
//! This module runs periodic scans over rows whose deadline has passed: confirmed
//! offers past their dispute window, VIP subscriptions past their paid period, and
//! private ads past their expiry date. Each scan enqueues worker jobs to the
//! Redis-backed queue rather than acting on rows directly, so the work survives a
//! restart and job handlers re-check row state before acting.

use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::server::{
    model::worker::WorkerJob,
    scheduler::{
        ad::schedule_ad_deactivations, offer::schedule_offer_releases,
        vip::schedule_subscription_expiries,
    },
};

pub mod ad;
pub mod config;
pub mod offer;
pub mod vip;

use self::config::ad_expiry as ad_expiry_config;
use self::config::offer_release as offer_release_config;
use self::config::vip_subscription as vip_subscription_config;

macro_rules! add_cron_job {
    ($sched:expr, $cron:expr, $db:expr, $storage:expr, $fn:expr, $name:expr) => {{
        let db_clone = $db.clone();
        let storage_clone = $storage.clone();

        $sched
            .add(Job::new_async($cron, move |_, _| {
                let db = db_clone.clone();
                let mut job_storage = storage_clone.clone();

                Box::pin(async move {
                    match $fn(&db, &mut job_storage).await {
                        Ok(count) => tracing::info!("Scheduled {} {} job(s)", count, $name),
                        Err(e) => tracing::error!("Error scheduling {} jobs: {:?}", $name, e),
                    }
                })
            })?)
            .await?;
    }};
}

/// Initialize and start the cron job scheduler
pub async fn start_scheduler(
    db: &DatabaseConnection,
    job_storage: &mut RedisStorage<WorkerJob>,
) -> Result<(), JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    add_cron_job!(
        sched,
        offer_release_config::CRON_EXPRESSION,
        db,
        job_storage,
        schedule_offer_releases,
        "offer release"
    );

    add_cron_job!(
        sched,
        vip_subscription_config::CRON_EXPRESSION,
        db,
        job_storage,
        schedule_subscription_expiries,
        "subscription expiry"
    );

    add_cron_job!(
        sched,
        ad_expiry_config::CRON_EXPRESSION,
        db,
        job_storage,
        schedule_ad_deactivations,
        "ad expiry"
    );

    sched.start().await?;
    Ok(())
}

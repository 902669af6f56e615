use apalis::prelude::Data;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error,
    integration::PushClient,
    model::worker::WorkerJob,
    service::{ad::AdService, offer::OfferService, retry::RetryContext, vip::VipService},
};

pub async fn handle_job(
    job: WorkerJob,
    db: Data<DatabaseConnection>,
    push: Data<PushClient>,
) -> Result<(), Error> {
    match job {
        WorkerJob::ReleaseOffer { offer_id } => {
            tracing::debug!("Processing release for offer ID {}", offer_id);

            let db = db.clone();
            let push = push.clone();
            let mut ctx: RetryContext<()> = RetryContext::new();

            ctx.execute_with_retry(&format!("release for offer ID {}", offer_id), |_| {
                let db = db.clone();
                let push = push.clone();

                Box::pin(async move {
                    OfferService::new(&db, &push).auto_release(offer_id).await
                })
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to release offer ID {}: {:?}", offer_id, e);
                e
            })?;

            tracing::debug!("Successfully processed release for offer ID {}", offer_id);
        }
        WorkerJob::ExpireSubscription { subscription_id } => {
            tracing::debug!("Processing expiry for subscription ID {}", subscription_id);

            // A failed expiry is found again by the next hourly scan
            VipService::new(&db)
                .expire_subscription(subscription_id)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to expire subscription ID {}: {:?}", subscription_id, e);
                    e
                })?;

            tracing::debug!("Successfully expired subscription ID {}", subscription_id);
        }
        WorkerJob::DeactivateAd { ad_id } => {
            tracing::debug!("Processing expiry for ad ID {}", ad_id);

            AdService::new(&db)
                .deactivate_expired(ad_id)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to deactivate ad ID {}: {:?}", ad_id, e);
                    e
                })?;

            tracing::debug!("Successfully deactivated ad ID {}", ad_id);
        }
    }

    Ok(())
}

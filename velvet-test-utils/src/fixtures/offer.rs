//! Offer fixture utilities.

use chrono::{Duration, Utc};
use entity::private_offer::OfferStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, model::PrivateOfferModel, TestSetup};

impl TestSetup {
    pub fn offers<'a>(&'a mut self) -> OfferFixtures<'a> {
        OfferFixtures { setup: self }
    }
}

pub struct OfferFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> OfferFixtures<'a> {
    /// Insert a fresh offer in the initial `Offer` status, booked for
    /// tomorrow.
    pub async fn insert_offer(
        &self,
        ad_id: i32,
        client_id: i32,
    ) -> Result<PrivateOfferModel, TestError> {
        Ok(
            entity::prelude::PrivateOffer::insert(entity::private_offer::ActiveModel {
                ad_id: ActiveValue::Set(ad_id),
                client_id: ActiveValue::Set(client_id),
                status: ActiveValue::Set(OfferStatus::Offer),
                price_cents: ActiveValue::Set(25_000),
                starts_at: ActiveValue::Set(Utc::now().naive_utc() + Duration::days(1)),
                duration_minutes: ActiveValue::Set(60),
                location: ActiveValue::Set("Hotel bar downtown".to_string()),
                note: ActiveValue::Set(None),
                completed_at: ActiveValue::Set(None),
                resolved_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn get_offer(&self, offer_id: i32) -> Result<PrivateOfferModel, TestError> {
        Ok(entity::prelude::PrivateOffer::find_by_id(offer_id)
            .one(&self.setup.state.db)
            .await?
            .expect("offer fixture not found"))
    }

    /// Force an offer into `Confirmed` with the given completion time,
    /// skipping the accept/confirm round trip.
    pub async fn confirm_offer(
        &self,
        offer_id: i32,
        completed_at: chrono::NaiveDateTime,
    ) -> Result<(), TestError> {
        entity::private_offer::ActiveModel {
            id: ActiveValue::Set(offer_id),
            status: ActiveValue::Set(OfferStatus::Confirmed),
            completed_at: ActiveValue::Set(Some(completed_at)),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }
}

use chrono::Utc;
use entity::private_offer::OfferStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::offer::CreateOfferDto;

pub struct OfferRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfferRepository<'a, C> {
    /// Creates a new instance of [`OfferRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new offer against an ad, starting in [`OfferStatus::Offer`]
    pub async fn create(
        &self,
        ad_id: i32,
        client_id: i32,
        offer: CreateOfferDto,
    ) -> Result<entity::private_offer::Model, DbErr> {
        let offer = entity::private_offer::ActiveModel {
            ad_id: ActiveValue::Set(ad_id),
            client_id: ActiveValue::Set(client_id),
            status: ActiveValue::Set(OfferStatus::Offer),
            price_cents: ActiveValue::Set(offer.price_cents),
            starts_at: ActiveValue::Set(offer.starts_at),
            duration_minutes: ActiveValue::Set(offer.duration_minutes),
            location: ActiveValue::Set(offer.location),
            note: ActiveValue::Set(offer.note),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        offer.insert(self.db).await
    }

    pub async fn get(
        &self,
        offer_id: i32,
    ) -> Result<Option<entity::private_offer::Model>, DbErr> {
        entity::prelude::PrivateOffer::find_by_id(offer_id)
            .one(self.db)
            .await
    }

    /// Fetches an offer together with the ad it targets
    ///
    /// The ad side is optional in the type but in practice always present; the
    /// foreign key guarantees it.
    pub async fn get_with_ad(
        &self,
        offer_id: i32,
    ) -> Result<
        Option<(
            entity::private_offer::Model,
            Option<entity::private_ad::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::PrivateOffer::find_by_id(offer_id)
            .find_also_related(entity::private_ad::Entity)
            .one(self.db)
            .await
    }

    /// Lists offers a client created, newest first
    pub async fn list_by_client(
        &self,
        client_id: i32,
        status: Option<OfferStatus>,
    ) -> Result<
        Vec<(
            entity::private_offer::Model,
            Option<entity::private_ad::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::PrivateOffer::find()
            .find_also_related(entity::private_ad::Entity)
            .filter(entity::private_offer::Column::ClientId.eq(client_id));

        if let Some(status) = status {
            query = query.filter(entity::private_offer::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::private_offer::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists offers received on a provider's ads, newest first
    pub async fn list_by_provider(
        &self,
        provider_id: i32,
        status: Option<OfferStatus>,
    ) -> Result<
        Vec<(
            entity::private_offer::Model,
            Option<entity::private_ad::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::PrivateOffer::find()
            .find_also_related(entity::private_ad::Entity)
            .filter(entity::private_ad::Column::OwnerId.eq(provider_id));

        if let Some(status) = status {
            query = query.filter(entity::private_offer::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::private_offer::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Moves an offer to a new status and stamps the lifecycle timestamps
    ///
    /// `completed_at` is set on entry to [`OfferStatus::Confirmed`] and opens
    /// the dispute window. `resolved_at` is set on entry to any status that
    /// ends the normal flow (Disputed, Released, Rejected, Cancelled).
    pub async fn apply_status(
        &self,
        offer: entity::private_offer::Model,
        status: OfferStatus,
    ) -> Result<entity::private_offer::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let mut offer_am = offer.into_active_model();
        if status == OfferStatus::Confirmed {
            offer_am.completed_at = ActiveValue::Set(Some(now));
        }
        if status == OfferStatus::Disputed || status.is_terminal() {
            offer_am.resolved_at = ActiveValue::Set(Some(now));
        }
        offer_am.status = ActiveValue::Set(status);
        offer_am.updated_at = ActiveValue::Set(now);

        offer_am.update(self.db).await
    }

    /// Counts offers on an ad that are still in flight
    ///
    /// Disputed offers count as open; a frozen dispute keeps its ad alive
    /// until support resolves it.
    pub async fn count_open_by_ad(&self, ad_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PrivateOffer::find()
            .filter(entity::private_offer::Column::AdId.eq(ad_id))
            .filter(entity::private_offer::Column::Status.is_not_in([
                OfferStatus::Released,
                OfferStatus::Rejected,
                OfferStatus::Cancelled,
            ]))
            .count(self.db)
            .await
    }
}

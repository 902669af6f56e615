use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OfferDto {
    pub id: i32,
    pub ad_id: i32,
    pub client_id: i32,
    pub provider_id: i32,
    pub status: String,
    pub price_cents: i64,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: String,
    pub note: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub resolved_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl OfferDto {
    /// The provider is the owner of the ad the offer was made against,
    /// which is not stored on the offer row itself.
    pub fn from_offer(offer: entity::private_offer::Model, provider_id: i32) -> Self {
        use sea_orm::ActiveEnum;

        OfferDto {
            id: offer.id,
            ad_id: offer.ad_id,
            client_id: offer.client_id,
            provider_id,
            status: offer.status.to_value(),
            price_cents: offer.price_cents,
            starts_at: offer.starts_at,
            duration_minutes: offer.duration_minutes,
            location: offer.location,
            note: offer.note,
            completed_at: offer.completed_at,
            resolved_at: offer.resolved_at,
            created_at: offer.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateOfferDto {
    pub price_cents: i64,
    pub starts_at: NaiveDateTime,
    pub duration_minutes: i32,
    pub location: String,
    pub note: Option<String>,
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct OfferListQuery {
    /// Filter to offers made by you (`client`) or received on your ads
    /// (`provider`). Defaults to `client`.
    pub role: Option<String>,
    pub status: Option<String>,
}

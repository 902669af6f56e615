use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PrivateAdDto {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub price_hour_cents: i64,
    pub cover_url: Option<String>,
    pub active: bool,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::private_ad::Model> for PrivateAdDto {
    fn from(ad: entity::private_ad::Model) -> Self {
        PrivateAdDto {
            id: ad.id,
            owner_id: ad.owner_id,
            title: ad.title,
            description: ad.description,
            category: ad.category,
            city: ad.city,
            price_hour_cents: ad.price_hour_cents,
            cover_url: ad.cover_url,
            active: ad.active,
            expires_at: ad.expires_at,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePrivateAdDto {
    pub title: String,
    pub description: String,
    pub category: String,
    pub city: String,
    pub price_hour_cents: i64,
    pub cover_url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePrivateAdDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub price_hour_cents: Option<i64>,
    pub cover_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct AdListQuery {
    pub city: Option<String>,
    pub category: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VipPageDto {
    pub id: i32,
    pub owner_id: i32,
    pub handle: String,
    pub title: String,
    pub description: String,
    pub monthly_price_cents: i64,
    pub created_at: NaiveDateTime,
}

impl From<entity::vip_page::Model> for VipPageDto {
    fn from(page: entity::vip_page::Model) -> Self {
        VipPageDto {
            id: page.id,
            owner_id: page.owner_id,
            handle: page.handle,
            title: page.title,
            description: page.description,
            monthly_price_cents: page.monthly_price_cents,
            created_at: page.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateVipPageDto {
    pub handle: String,
    pub title: String,
    pub description: String,
    pub monthly_price_cents: i64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateVipPageDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub monthly_price_cents: Option<i64>,
}

/// Public view of a VIP page, augmented with what the caller may do with it.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VipPageDetailDto {
    pub page: VipPageDto,
    pub content_count: u64,
    /// Whether the caller currently holds paid access to gated content.
    pub subscribed: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VipContentDto {
    pub id: i32,
    pub page_id: i32,
    pub title: String,
    pub body: String,
    pub media_url: Option<String>,
    pub preview: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::vip_content::Model> for VipContentDto {
    fn from(content: entity::vip_content::Model) -> Self {
        VipContentDto {
            id: content.id,
            page_id: content.page_id,
            title: content.title,
            body: content.body,
            media_url: content.media_url,
            preview: content.preview,
            created_at: content.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateVipContentDto {
    pub title: String,
    pub body: String,
    pub media_url: Option<String>,
    pub preview: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VipSubscriptionDto {
    pub id: i32,
    pub page: VipPageDto,
    pub status: String,
    pub current_period_end: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl VipSubscriptionDto {
    pub fn from_subscription(
        subscription: entity::vip_subscription::Model,
        page: entity::vip_page::Model,
    ) -> Self {
        use sea_orm::ActiveEnum;

        VipSubscriptionDto {
            id: subscription.id,
            page: page.into(),
            status: subscription.status.to_value(),
            current_period_end: subscription.current_period_end,
            created_at: subscription.created_at,
        }
    }
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct ContentListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DatingPageDto {
    pub id: i32,
    pub display_name: String,
    pub age: i32,
    pub gender: String,
    pub seeking: String,
    pub bio: String,
    pub city: String,
    pub photo_url: Option<String>,
    pub active: bool,
}

impl From<entity::dating_page::Model> for DatingPageDto {
    fn from(page: entity::dating_page::Model) -> Self {
        DatingPageDto {
            id: page.id,
            display_name: page.display_name,
            age: page.age,
            gender: page.gender,
            seeking: page.seeking,
            bio: page.bio,
            city: page.city,
            photo_url: page.photo_url,
            active: page.active,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpsertDatingPageDto {
    pub display_name: String,
    pub age: i32,
    pub gender: String,
    pub seeking: String,
    pub bio: String,
    pub city: String,
    pub photo_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SwipeDto {
    pub target_page_id: i32,
    pub liked: bool,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub chat_id: i32,
    pub page: DatingPageDto,
    pub created_at: NaiveDateTime,
}

/// Outcome of a swipe. `matched` flips to true on a reciprocal like, in
/// which case the fresh match rides along.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SwipeResultDto {
    pub matched: bool,
    #[serde(rename = "match")]
    pub match_result: Option<MatchDto>,
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct DiscoverQuery {
    pub city: Option<String>,
    pub limit: Option<u64>,
}

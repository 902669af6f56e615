use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiveStreamPageDto {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::live_stream_page::Model> for LiveStreamPageDto {
    fn from(page: entity::live_stream_page::Model) -> Self {
        LiveStreamPageDto {
            id: page.id,
            owner_id: page.owner_id,
            title: page.title,
            description: page.description,
            created_at: page.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpsertLiveStreamPageDto {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiveStreamDto {
    pub id: i32,
    pub page_id: i32,
    pub room_name: String,
    pub title: String,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
}

impl From<entity::live_stream::Model> for LiveStreamDto {
    fn from(stream: entity::live_stream::Model) -> Self {
        LiveStreamDto {
            id: stream.id,
            page_id: stream.page_id,
            room_name: stream.room_name,
            title: stream.title,
            started_at: stream.started_at,
            ended_at: stream.ended_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StartStreamDto {
    pub title: String,
}

/// A stream plus the SFU token the caller uses to enter its room.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StreamTokenDto {
    pub stream: LiveStreamDto,
    pub token: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiveNowDto {
    pub stream: LiveStreamDto,
    pub page: LiveStreamPageDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiveStreamPageDetailDto {
    pub page: LiveStreamPageDto,
    pub live: Option<LiveStreamDto>,
}

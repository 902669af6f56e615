//! Livestream service layer.
//!
//! This module contains business logic for livestream channel pages and
//! broadcast lifecycle. Media never touches this process: the SFU provider
//! owns the rooms, and this service only keeps channel metadata and mints
//! join tokens through the provider's HTTP API.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::live::{
        LiveNowDto, LiveStreamDto, LiveStreamPageDetailDto, LiveStreamPageDto, StartStreamDto,
        StreamTokenDto, UpsertLiveStreamPageDto,
    },
    server::{
        data::live::{page::LiveStreamPageRepository, stream::LiveStreamRepository},
        error::Error,
        integration::SfuClient,
    },
};

/// Service for livestream channels and broadcasts.
pub struct LiveService<'a> {
    db: &'a DatabaseConnection,
    sfu: &'a SfuClient,
}

impl<'a> LiveService<'a> {
    /// Creates a new instance of LiveService.
    pub fn new(db: &'a DatabaseConnection, sfu: &'a SfuClient) -> Self {
        Self { db, sfu }
    }

    /// Creates or replaces the user's channel page.
    ///
    /// # Returns
    /// - `Ok((LiveStreamPageDto, true))` - Channel page created
    /// - `Ok((LiveStreamPageDto, false))` - Existing channel page updated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn upsert_page(
        &self,
        owner_id: i32,
        page: UpsertLiveStreamPageDto,
    ) -> Result<(LiveStreamPageDto, bool), Error> {
        let page_repo = LiveStreamPageRepository::new(self.db);

        match page_repo.get_by_owner(owner_id).await? {
            Some(existing) => {
                let updated = page_repo.update(existing, page).await?;
                Ok((updated.into(), false))
            }
            None => {
                let created = page_repo.create(owner_id, page).await?;
                Ok((created.into(), true))
            }
        }
    }

    /// Fetches a channel page with its current broadcast, if one is running.
    pub async fn get_page_detail(&self, page_id: i32) -> Result<LiveStreamPageDetailDto, Error> {
        let page_repo = LiveStreamPageRepository::new(self.db);
        let Some(page) = page_repo.get(page_id).await? else {
            return Err(Error::NotFound("Channel page not found".to_string()));
        };

        let stream_repo = LiveStreamRepository::new(self.db);
        let live = stream_repo.get_live_by_page(page.id).await?;

        Ok(LiveStreamPageDetailDto {
            page: page.into(),
            live: live.map(LiveStreamDto::from),
        })
    }

    /// Lists currently running broadcasts, most recently started first.
    pub async fn list_live(&self) -> Result<Vec<LiveNowDto>, Error> {
        let stream_repo = LiveStreamRepository::new(self.db);
        let streams = stream_repo.list_live().await?;

        Ok(streams
            .into_iter()
            .filter_map(|(stream, page)| {
                page.map(|page| LiveNowDto {
                    stream: stream.into(),
                    page: page.into(),
                })
            })
            .collect())
    }

    /// Starts a broadcast on the user's channel.
    ///
    /// Creates the SFU room first; the stream row is only written once the
    /// room exists, and the returned token lets the owner join it as host.
    ///
    /// # Returns
    /// - `Ok(StreamTokenDto)` - Broadcast started, host token attached
    /// - `Err(Error::NotFound)` - User has no channel page
    /// - `Err(Error::Conflict)` - Channel already has a running broadcast
    /// - `Err(Error::IntegrationError)` - SFU room or token request failed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn start_stream(
        &self,
        owner_id: i32,
        start: StartStreamDto,
    ) -> Result<StreamTokenDto, Error> {
        let page_repo = LiveStreamPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_owner(owner_id).await? else {
            return Err(Error::NotFound(
                "Create a channel page before going live".to_string(),
            ));
        };

        let stream_repo = LiveStreamRepository::new(self.db);
        if stream_repo.get_live_by_page(page.id).await?.is_some() {
            return Err(Error::Conflict("Channel is already live".to_string()));
        }

        let room_name = Uuid::new_v4().to_string();
        self.sfu.create_room(&room_name).await?;

        let stream = stream_repo.create(page.id, room_name, start.title).await?;

        let token = self
            .sfu
            .issue_token(&stream.room_name, owner_id, "host")
            .await?;

        Ok(StreamTokenDto {
            stream: stream.into(),
            token,
        })
    }

    /// Ends the user's running broadcast.
    ///
    /// The stream row is closed first; the SFU room teardown is best-effort
    /// since the room expires on its own once everyone disconnects.
    pub async fn stop_stream(&self, owner_id: i32) -> Result<LiveStreamDto, Error> {
        let page_repo = LiveStreamPageRepository::new(self.db);
        let Some(page) = page_repo.get_by_owner(owner_id).await? else {
            return Err(Error::NotFound("Channel page not found".to_string()));
        };

        let stream_repo = LiveStreamRepository::new(self.db);
        let Some(stream) = stream_repo.get_live_by_page(page.id).await? else {
            return Err(Error::Conflict("Channel is not live".to_string()));
        };

        let stream = stream_repo.end(stream).await?;

        if let Err(err) = self.sfu.delete_room(&stream.room_name).await {
            tracing::warn!("Failed to delete SFU room {}: {}", stream.room_name, err);
        }

        Ok(stream.into())
    }

    /// Mints a viewer token for a running broadcast.
    pub async fn join_stream(&self, user_id: i32, stream_id: i32) -> Result<StreamTokenDto, Error> {
        let stream_repo = LiveStreamRepository::new(self.db);

        let stream = match stream_repo.get(stream_id).await? {
            Some(stream) if stream.ended_at.is_none() => stream,
            _ => return Err(Error::NotFound("Stream is not live".to_string())),
        };

        let token = self
            .sfu
            .issue_token(&stream.room_name, user_id, "viewer")
            .await?;

        Ok(StreamTokenDto {
            stream: stream.into(),
            token,
        })
    }
}

//! Live channel and stream fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{LiveStreamModel, LiveStreamPageModel},
    TestSetup,
};

impl TestSetup {
    pub fn live<'a>(&'a mut self) -> LiveFixtures<'a> {
        LiveFixtures { setup: self }
    }
}

pub struct LiveFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> LiveFixtures<'a> {
    pub async fn insert_page(&self, owner_id: i32) -> Result<LiveStreamPageModel, TestError> {
        Ok(
            entity::prelude::LiveStreamPage::insert(entity::live_stream_page::ActiveModel {
                owner_id: ActiveValue::Set(owner_id),
                title: ActiveValue::Set("Late night room".to_string()),
                description: ActiveValue::Set("Streams most evenings after ten.".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a stream that is currently live.
    pub async fn insert_stream(
        &self,
        page_id: i32,
        room_name: &str,
    ) -> Result<LiveStreamModel, TestError> {
        Ok(
            entity::prelude::LiveStream::insert(entity::live_stream::ActiveModel {
                page_id: ActiveValue::Set(page_id),
                room_name: ActiveValue::Set(room_name.to_string()),
                title: ActiveValue::Set("Friday night".to_string()),
                started_at: ActiveValue::Set(Utc::now().naive_utc()),
                ended_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn get_stream(&self, stream_id: i32) -> Result<LiveStreamModel, TestError> {
        Ok(entity::prelude::LiveStream::find_by_id(stream_id)
            .one(&self.setup.state.db)
            .await?
            .expect("stream fixture not found"))
    }

    pub async fn end_stream(&self, stream_id: i32) -> Result<(), TestError> {
        entity::live_stream::ActiveModel {
            id: ActiveValue::Set(stream_id),
            ended_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        }
        .update(&self.setup.state.db)
        .await?;

        Ok(())
    }
}

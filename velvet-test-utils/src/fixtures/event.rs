//! Event fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::EventModel, TestSetup};

impl TestSetup {
    pub fn events<'a>(&'a mut self) -> EventFixtures<'a> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> EventFixtures<'a> {
    pub async fn insert_event(
        &self,
        organizer_id: i32,
        city: &str,
        starts_at: chrono::NaiveDateTime,
        ends_at: chrono::NaiveDateTime,
    ) -> Result<EventModel, TestError> {
        Ok(entity::prelude::Event::insert(entity::event::ActiveModel {
            organizer_id: ActiveValue::Set(organizer_id),
            title: ActiveValue::Set("Masquerade night".to_string()),
            description: ActiveValue::Set("Doors at nine, dress code enforced.".to_string()),
            venue: ActiveValue::Set("Club Aurora".to_string()),
            city: ActiveValue::Set(city.to_string()),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(ends_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}

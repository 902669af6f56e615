use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::event::{CreateEventDto, UpdateEventDto};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        organizer_id: i32,
        event: CreateEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            organizer_id: ActiveValue::Set(organizer_id),
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            venue: ActiveValue::Set(event.venue),
            city: ActiveValue::Set(event.city),
            starts_at: ActiveValue::Set(event.starts_at),
            ends_at: ActiveValue::Set(event.ends_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Lists events that have not finished yet, soonest first
    pub async fn list_upcoming(
        &self,
        city: Option<String>,
        now: NaiveDateTime,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        let mut query =
            entity::prelude::Event::find().filter(entity::event::Column::EndsAt.gte(now));

        if let Some(city) = city {
            query = query.filter(entity::event::Column::City.eq(city));
        }

        query
            .order_by_asc(entity::event::Column::StartsAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        event: entity::event::Model,
        update: UpdateEventDto,
    ) -> Result<entity::event::Model, DbErr> {
        let mut event_am = event.into_active_model();
        if let Some(title) = update.title {
            event_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = update.description {
            event_am.description = ActiveValue::Set(description);
        }
        if let Some(venue) = update.venue {
            event_am.venue = ActiveValue::Set(venue);
        }
        if let Some(city) = update.city {
            event_am.city = ActiveValue::Set(city);
        }
        if let Some(starts_at) = update.starts_at {
            event_am.starts_at = ActiveValue::Set(starts_at);
        }
        if let Some(ends_at) = update.ends_at {
            event_am.ends_at = ActiveValue::Set(ends_at);
        }
        event_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        event_am.update(self.db).await
    }

    /// Deletes an event
    ///
    /// Returns OK regardless of the event existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Event::delete_by_id(event_id)
            .exec(self.db)
            .await
    }
}

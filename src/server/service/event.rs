//! Event listing service layer.
//!
//! This module contains business logic for community event postings: who may
//! edit them, which ones show up in the public listing, and the sanity checks
//! on their schedule.

use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::event::{CreateEventDto, EventDto, EventListQuery, UpdateEventDto},
    server::{data::event::EventRepository, error::Error},
};

const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 50;

/// Service for community event postings.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of EventService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event organized by the given user.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Event created
    /// - `Err(Error::ValidationError)` - Field bounds or schedule violated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_event(
        &self,
        organizer_id: i32,
        event: CreateEventDto,
    ) -> Result<EventDto, Error> {
        validate_event_fields(&event.title, event.starts_at, event.ends_at)?;

        let event_repo = EventRepository::new(self.db);
        let event = event_repo.create(organizer_id, event).await?;

        Ok(event.into())
    }

    /// Lists events that have not ended yet, soonest first.
    pub async fn list_events(&self, query: EventListQuery) -> Result<Vec<EventDto>, Error> {
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let page = query.page.unwrap_or(0);

        let event_repo = EventRepository::new(self.db);
        let events = event_repo
            .list_upcoming(query.city, Utc::now().naive_utc(), per_page, page * per_page)
            .await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Fetches a single event.
    pub async fn get_event(&self, event_id: i32) -> Result<EventDto, Error> {
        let event_repo = EventRepository::new(self.db);

        let Some(event) = event_repo.get(event_id).await? else {
            return Err(Error::NotFound("Event not found".to_string()));
        };

        Ok(event.into())
    }

    /// Updates an event on behalf of its organizer.
    ///
    /// The merged result must still satisfy the field checks, so moving only
    /// `starts_at` past the stored `ends_at` is rejected.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Event updated
    /// - `Err(Error::NotFound)` - Event missing or not owned by the caller
    /// - `Err(Error::ValidationError)` - Field bounds or schedule violated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_event(
        &self,
        organizer_id: i32,
        event_id: i32,
        update: UpdateEventDto,
    ) -> Result<EventDto, Error> {
        let event_repo = EventRepository::new(self.db);

        let event = match event_repo.get(event_id).await? {
            Some(event) if event.organizer_id == organizer_id => event,
            _ => return Err(Error::NotFound("Event not found".to_string())),
        };

        validate_event_fields(
            update.title.as_deref().unwrap_or(&event.title),
            update.starts_at.unwrap_or(event.starts_at),
            update.ends_at.unwrap_or(event.ends_at),
        )?;

        let event = event_repo.update(event, update).await?;

        Ok(event.into())
    }

    /// Deletes an event on behalf of its organizer.
    pub async fn delete_event(&self, organizer_id: i32, event_id: i32) -> Result<(), Error> {
        let event_repo = EventRepository::new(self.db);

        match event_repo.get(event_id).await? {
            Some(event) if event.organizer_id == organizer_id => {}
            _ => return Err(Error::NotFound("Event not found".to_string())),
        }

        event_repo.delete(event_id).await?;

        Ok(())
    }
}

fn validate_event_fields(
    title: &str,
    starts_at: NaiveDateTime,
    ends_at: NaiveDateTime,
) -> Result<(), Error> {
    let title_length = title.chars().count();
    if !(3..=120).contains(&title_length) {
        return Err(Error::ValidationError(
            "Title must be between 3 and 120 characters".to_string(),
        ));
    }
    if ends_at <= starts_at {
        return Err(Error::ValidationError(
            "Event must end after it starts".to_string(),
        ));
    }

    Ok(())
}

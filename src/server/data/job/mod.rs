//! Job board data repositories.
//!
//! This module contains repositories for industry job postings and the
//! applications submitted against them.

pub mod application;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::job::CreateJobDto;

pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        employer_id: i32,
        job: CreateJobDto,
    ) -> Result<entity::job::Model, DbErr> {
        let job = entity::job::ActiveModel {
            employer_id: ActiveValue::Set(employer_id),
            title: ActiveValue::Set(job.title),
            description: ActiveValue::Set(job.description),
            city: ActiveValue::Set(job.city),
            compensation: ActiveValue::Set(job.compensation),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    pub async fn get(&self, job_id: i32) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id).one(self.db).await
    }

    /// Lists open postings, newest first, optionally narrowed by city
    pub async fn list_active(
        &self,
        city: Option<String>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        let mut query =
            entity::prelude::Job::find().filter(entity::job::Column::Active.eq(true));

        if let Some(city) = city {
            query = query.filter(entity::job::Column::City.eq(city));
        }

        query
            .order_by_desc(entity::job::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await
    }

    /// Closes a posting so it stops accepting applications
    pub async fn close(&self, job: entity::job::Model) -> Result<entity::job::Model, DbErr> {
        let mut job_am = job.into_active_model();
        job_am.active = ActiveValue::Set(false);
        job_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        job_am.update(self.db).await
    }
}

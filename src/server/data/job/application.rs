use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct JobApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobApplicationRepository<'a, C> {
    /// Creates a new instance of [`JobApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        job_id: i32,
        applicant_id: i32,
        message: String,
    ) -> Result<entity::job_application::Model, DbErr> {
        let application = entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(job_id),
            applicant_id: ActiveValue::Set(applicant_id),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Looks up a user's application to a job, if any
    pub async fn get_pair(
        &self,
        job_id: i32,
        applicant_id: i32,
    ) -> Result<Option<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .one(self.db)
            .await
    }

    /// Lists applications to a posting, newest first
    pub async fn list_by_job(
        &self,
        job_id: i32,
    ) -> Result<Vec<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists everything a user has applied to, newest first
    pub async fn list_by_applicant(
        &self,
        applicant_id: i32,
    ) -> Result<Vec<entity::job_application::Model>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .order_by_desc(entity::job_application::Column::CreatedAt)
            .all(self.db)
            .await
    }
}

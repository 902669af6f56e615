use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobDto {
    pub id: i32,
    pub employer_id: i32,
    pub title: String,
    pub description: String,
    pub city: String,
    pub compensation: String,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::job::Model> for JobDto {
    fn from(job: entity::job::Model) -> Self {
        JobDto {
            id: job.id,
            employer_id: job.employer_id,
            title: job.title,
            description: job.description,
            city: job.city,
            compensation: job.compensation,
            active: job.active,
            created_at: job.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub city: String,
    pub compensation: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobApplicationDto {
    pub id: i32,
    pub job_id: i32,
    pub applicant_id: i32,
    pub message: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::job_application::Model> for JobApplicationDto {
    fn from(application: entity::job_application::Model) -> Self {
        JobApplicationDto {
            id: application.id,
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            message: application.message,
            created_at: application.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplyJobDto {
    pub message: String,
}

#[derive(Clone, Deserialize, utoipa::IntoParams)]
pub struct JobListQuery {
    pub city: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

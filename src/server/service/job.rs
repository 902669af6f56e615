//! Job board service layer.
//!
//! This module contains business logic for industry job postings and
//! applications. Postings stay readable by their employer after closing,
//! everyone else sees only the active board.

use sea_orm::DatabaseConnection;

use crate::{
    model::job::{ApplyJobDto, CreateJobDto, JobApplicationDto, JobDto, JobListQuery},
    server::{
        data::job::{application::JobApplicationRepository, JobRepository},
        error::Error,
    },
};

const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 50;

/// Service for job postings and their applications.
pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    /// Creates a new instance of JobService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active job posting for the given employer.
    ///
    /// # Returns
    /// - `Ok(JobDto)` - Posting created
    /// - `Err(Error::ValidationError)` - Field bounds violated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_job(&self, employer_id: i32, job: CreateJobDto) -> Result<JobDto, Error> {
        let title_length = job.title.chars().count();
        if !(3..=120).contains(&title_length) {
            return Err(Error::ValidationError(
                "Title must be between 3 and 120 characters".to_string(),
            ));
        }

        let job_repo = JobRepository::new(self.db);
        let job = job_repo.create(employer_id, job).await?;

        Ok(job.into())
    }

    /// Lists active postings, newest first, optionally narrowed by city.
    pub async fn list_jobs(&self, query: JobListQuery) -> Result<Vec<JobDto>, Error> {
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let page = query.page.unwrap_or(0);

        let job_repo = JobRepository::new(self.db);
        let jobs = job_repo
            .list_active(query.city, per_page, page * per_page)
            .await?;

        Ok(jobs.into_iter().map(JobDto::from).collect())
    }

    /// Fetches a single posting.
    ///
    /// A closed posting stays visible to its employer and 404s for everyone
    /// else.
    pub async fn get_job(&self, job_id: i32, viewer_id: i32) -> Result<JobDto, Error> {
        let job_repo = JobRepository::new(self.db);

        let job = match job_repo.get(job_id).await? {
            Some(job) if job.active || job.employer_id == viewer_id => job,
            _ => return Err(Error::NotFound("Job not found".to_string())),
        };

        Ok(job.into())
    }

    /// Applies to an active posting.
    ///
    /// # Returns
    /// - `Ok(JobApplicationDto)` - Application stored
    /// - `Err(Error::NotFound)` - Posting missing or closed
    /// - `Err(Error::ValidationError)` - Own posting, or message out of bounds
    /// - `Err(Error::Conflict)` - Already applied
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn apply(
        &self,
        applicant_id: i32,
        job_id: i32,
        application: ApplyJobDto,
    ) -> Result<JobApplicationDto, Error> {
        let message_length = application.message.chars().count();
        if !(1..=4000).contains(&message_length) {
            return Err(Error::ValidationError(
                "Message must be between 1 and 4000 characters".to_string(),
            ));
        }

        let job_repo = JobRepository::new(self.db);
        let job = match job_repo.get(job_id).await? {
            Some(job) if job.active => job,
            _ => return Err(Error::NotFound("Job not found".to_string())),
        };
        if job.employer_id == applicant_id {
            return Err(Error::ValidationError(
                "You cannot apply to your own job".to_string(),
            ));
        }

        let application_repo = JobApplicationRepository::new(self.db);
        if application_repo
            .get_pair(job.id, applicant_id)
            .await?
            .is_some()
        {
            return Err(Error::Conflict(
                "You already applied to this job".to_string(),
            ));
        }

        let application = application_repo
            .create(job.id, applicant_id, application.message)
            .await?;

        Ok(application.into())
    }

    /// Lists applications to a posting on behalf of its employer.
    pub async fn list_applications(
        &self,
        employer_id: i32,
        job_id: i32,
    ) -> Result<Vec<JobApplicationDto>, Error> {
        let job_repo = JobRepository::new(self.db);

        let job = match job_repo.get(job_id).await? {
            Some(job) if job.employer_id == employer_id => job,
            _ => return Err(Error::NotFound("Job not found".to_string())),
        };

        let application_repo = JobApplicationRepository::new(self.db);
        let applications = application_repo.list_by_job(job.id).await?;

        Ok(applications
            .into_iter()
            .map(JobApplicationDto::from)
            .collect())
    }

    /// Lists everything the user has applied to, newest first.
    pub async fn list_own_applications(
        &self,
        applicant_id: i32,
    ) -> Result<Vec<JobApplicationDto>, Error> {
        let application_repo = JobApplicationRepository::new(self.db);
        let applications = application_repo.list_by_applicant(applicant_id).await?;

        Ok(applications
            .into_iter()
            .map(JobApplicationDto::from)
            .collect())
    }

    /// Closes a posting on behalf of its employer.
    ///
    /// Closing an already closed posting is a no-op that returns the posting
    /// unchanged.
    pub async fn close_job(&self, employer_id: i32, job_id: i32) -> Result<JobDto, Error> {
        let job_repo = JobRepository::new(self.db);

        let job = match job_repo.get(job_id).await? {
            Some(job) if job.employer_id == employer_id => job,
            _ => return Err(Error::NotFound("Job not found".to_string())),
        };

        if !job.active {
            return Ok(job.into());
        }

        let job = job_repo.close(job).await?;

        Ok(job.into())
    }
}

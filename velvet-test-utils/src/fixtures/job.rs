//! Job board fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{JobApplicationModel, JobModel},
    TestSetup,
};

impl TestSetup {
    pub fn jobs<'a>(&'a mut self) -> JobFixtures<'a> {
        JobFixtures { setup: self }
    }
}

pub struct JobFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> JobFixtures<'a> {
    pub async fn insert_job(&self, employer_id: i32, city: &str) -> Result<JobModel, TestError> {
        Ok(entity::prelude::Job::insert(entity::job::ActiveModel {
            employer_id: ActiveValue::Set(employer_id),
            title: ActiveValue::Set("Bar staff wanted".to_string()),
            description: ActiveValue::Set("Weekend shifts at a members club.".to_string()),
            city: ActiveValue::Set(city.to_string()),
            compensation: ActiveValue::Set("20/hour plus tips".to_string()),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_application(
        &self,
        job_id: i32,
        applicant_id: i32,
    ) -> Result<JobApplicationModel, TestError> {
        Ok(
            entity::prelude::JobApplication::insert(entity::job_application::ActiveModel {
                job_id: ActiveValue::Set(job_id),
                applicant_id: ActiveValue::Set(applicant_id),
                message: ActiveValue::Set("Five years behind the bar.".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_velvet_user::VelvetUser, m20260815_000015_job::Job};

static IDX_JOB_APPLICATION_JOB_APPLICANT: &str = "idx-job_application-job_id-applicant_id";
static IDX_JOB_APPLICATION_APPLICANT_ID: &str = "idx-job_application-applicant_id";
static FK_JOB_APPLICATION_JOB_ID: &str = "fk-job_application-job_id";
static FK_JOB_APPLICATION_APPLICANT_ID: &str = "fk-job_application-applicant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplication::Id))
                    .col(integer(JobApplication::JobId))
                    .col(integer(JobApplication::ApplicantId))
                    .col(text(JobApplication::Message))
                    .col(timestamp(JobApplication::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATION_JOB_APPLICANT)
                    .table(JobApplication::Table)
                    .col(JobApplication::JobId)
                    .col(JobApplication::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_APPLICATION_APPLICANT_ID)
                    .table(JobApplication::Table)
                    .col(JobApplication::ApplicantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_APPLICATION_JOB_ID)
                    .from_tbl(JobApplication::Table)
                    .from_col(JobApplication::JobId)
                    .to_tbl(Job::Table)
                    .to_col(Job::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_APPLICATION_APPLICANT_ID)
                    .from_tbl(JobApplication::Table)
                    .from_col(JobApplication::ApplicantId)
                    .to_tbl(VelvetUser::Table)
                    .to_col(VelvetUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOB_APPLICATION_APPLICANT_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_JOB_APPLICATION_JOB_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_APPLICATION_APPLICANT_ID)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_APPLICATION_JOB_APPLICANT)
                    .table(JobApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum JobApplication {
    Table,
    Id,
    JobId,
    ApplicantId,
    Message,
    CreatedAt,
}

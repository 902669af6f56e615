use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static IDX_JOB_CITY: &str = "idx-job-city";
static FK_JOB_EMPLOYER_ID: &str = "fk-job-employer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::EmployerId))
                    .col(string(Job::Title))
                    .col(text(Job::Description))
                    .col(string(Job::City))
                    .col(string(Job::Compensation))
                    .col(boolean(Job::Active))
                    .col(timestamp(Job::CreatedAt))
                    .col(timestamp(Job::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create().name(IDX_JOB_CITY).table(Job::Table).col(Job::City).to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_EMPLOYER_ID)
                    .from_tbl(Job::Table)
                    .from_col(Job::EmployerId)
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
                ForeignKey::drop().name(FK_JOB_EMPLOYER_ID).table(Job::Table).to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_JOB_CITY).table(Job::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    EmployerId,
    Title,
    Description,
    City,
    Compensation,
    Active,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static IDX_DATING_PAGE_CITY: &str = "idx-dating_page-city";
static FK_DATING_PAGE_USER_ID: &str = "fk-dating_page-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatingPage::Table)
                    .if_not_exists()
                    .col(pk_auto(DatingPage::Id))
                    .col(integer_uniq(DatingPage::UserId))
                    .col(string(DatingPage::DisplayName))
                    .col(integer(DatingPage::Age))
                    .col(string(DatingPage::Gender))
                    .col(string(DatingPage::Seeking))
                    .col(text(DatingPage::Bio))
                    .col(string(DatingPage::City))
                    .col(string_null(DatingPage::PhotoUrl))
                    .col(boolean(DatingPage::Active))
                    .col(timestamp(DatingPage::CreatedAt))
                    .col(timestamp(DatingPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DATING_PAGE_CITY)
                    .table(DatingPage::Table)
                    .col(DatingPage::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DATING_PAGE_USER_ID)
                    .from_tbl(DatingPage::Table)
                    .from_col(DatingPage::UserId)
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
                    .name(FK_DATING_PAGE_USER_ID)
                    .table(DatingPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DATING_PAGE_CITY)
                    .table(DatingPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DatingPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DatingPage {
    Table,
    Id,
    UserId,
    DisplayName,
    Age,
    Gender,
    Seeking,
    Bio,
    City,
    PhotoUrl,
    Active,
    CreatedAt,
    UpdatedAt,
}

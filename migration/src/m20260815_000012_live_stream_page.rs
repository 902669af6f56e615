use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static FK_LIVE_STREAM_PAGE_OWNER_ID: &str = "fk-live_stream_page-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LiveStreamPage::Table)
                    .if_not_exists()
                    .col(pk_auto(LiveStreamPage::Id))
                    .col(integer_uniq(LiveStreamPage::OwnerId))
                    .col(string(LiveStreamPage::Title))
                    .col(text(LiveStreamPage::Description))
                    .col(timestamp(LiveStreamPage::CreatedAt))
                    .col(timestamp(LiveStreamPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIVE_STREAM_PAGE_OWNER_ID)
                    .from_tbl(LiveStreamPage::Table)
                    .from_col(LiveStreamPage::OwnerId)
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
                    .name(FK_LIVE_STREAM_PAGE_OWNER_ID)
                    .table(LiveStreamPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LiveStreamPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LiveStreamPage {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}

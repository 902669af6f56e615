use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000012_live_stream_page::LiveStreamPage;

static IDX_LIVE_STREAM_PAGE_ID: &str = "idx-live_stream-page_id";
static FK_LIVE_STREAM_PAGE_ID: &str = "fk-live_stream-page_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LiveStream::Table)
                    .if_not_exists()
                    .col(pk_auto(LiveStream::Id))
                    .col(integer(LiveStream::PageId))
                    .col(string_uniq(LiveStream::RoomName))
                    .col(string(LiveStream::Title))
                    .col(timestamp(LiveStream::StartedAt))
                    .col(timestamp_null(LiveStream::EndedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LIVE_STREAM_PAGE_ID)
                    .table(LiveStream::Table)
                    .col(LiveStream::PageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIVE_STREAM_PAGE_ID)
                    .from_tbl(LiveStream::Table)
                    .from_col(LiveStream::PageId)
                    .to_tbl(LiveStreamPage::Table)
                    .to_col(LiveStreamPage::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LIVE_STREAM_PAGE_ID)
                    .table(LiveStream::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LIVE_STREAM_PAGE_ID)
                    .table(LiveStream::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LiveStream::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LiveStream {
    Table,
    Id,
    PageId,
    RoomName,
    Title,
    StartedAt,
    EndedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000009_vip_page::VipPage;

static IDX_VIP_CONTENT_PAGE_ID: &str = "idx-vip_content-page_id";
static FK_VIP_CONTENT_PAGE_ID: &str = "fk-vip_content-page_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VipContent::Table)
                    .if_not_exists()
                    .col(pk_auto(VipContent::Id))
                    .col(integer(VipContent::PageId))
                    .col(string(VipContent::Title))
                    .col(text(VipContent::Body))
                    .col(string_null(VipContent::MediaUrl))
                    .col(boolean(VipContent::Preview))
                    .col(timestamp(VipContent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VIP_CONTENT_PAGE_ID)
                    .table(VipContent::Table)
                    .col(VipContent::PageId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VIP_CONTENT_PAGE_ID)
                    .from_tbl(VipContent::Table)
                    .from_col(VipContent::PageId)
                    .to_tbl(VipPage::Table)
                    .to_col(VipPage::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VIP_CONTENT_PAGE_ID)
                    .table(VipContent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VIP_CONTENT_PAGE_ID)
                    .table(VipContent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VipContent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VipContent {
    Table,
    Id,
    PageId,
    Title,
    Body,
    MediaUrl,
    Preview,
    CreatedAt,
}

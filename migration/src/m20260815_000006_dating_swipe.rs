use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000005_dating_page::DatingPage;

static IDX_DATING_SWIPE_SWIPER_TARGET: &str = "idx-dating_swipe-swiper_page_id-target_page_id";
static FK_DATING_SWIPE_SWIPER_PAGE_ID: &str = "fk-dating_swipe-swiper_page_id";
static FK_DATING_SWIPE_TARGET_PAGE_ID: &str = "fk-dating_swipe-target_page_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatingSwipe::Table)
                    .if_not_exists()
                    .col(pk_auto(DatingSwipe::Id))
                    .col(integer(DatingSwipe::SwiperPageId))
                    .col(integer(DatingSwipe::TargetPageId))
                    .col(boolean(DatingSwipe::Liked))
                    .col(timestamp(DatingSwipe::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DATING_SWIPE_SWIPER_TARGET)
                    .table(DatingSwipe::Table)
                    .col(DatingSwipe::SwiperPageId)
                    .col(DatingSwipe::TargetPageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DATING_SWIPE_SWIPER_PAGE_ID)
                    .from_tbl(DatingSwipe::Table)
                    .from_col(DatingSwipe::SwiperPageId)
                    .to_tbl(DatingPage::Table)
                    .to_col(DatingPage::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DATING_SWIPE_TARGET_PAGE_ID)
                    .from_tbl(DatingSwipe::Table)
                    .from_col(DatingSwipe::TargetPageId)
                    .to_tbl(DatingPage::Table)
                    .to_col(DatingPage::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DATING_SWIPE_TARGET_PAGE_ID)
                    .table(DatingSwipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DATING_SWIPE_SWIPER_PAGE_ID)
                    .table(DatingSwipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DATING_SWIPE_SWIPER_TARGET)
                    .table(DatingSwipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DatingSwipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DatingSwipe {
    Table,
    Id,
    SwiperPageId,
    TargetPageId,
    Liked,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000005_dating_page::DatingPage, m20260815_000007_chat::Chat};

static IDX_DATING_MATCH_PAGE_PAIR: &str = "idx-dating_match-page_a_id-page_b_id";
static IDX_DATING_MATCH_PAGE_B_ID: &str = "idx-dating_match-page_b_id";
static FK_DATING_MATCH_PAGE_A_ID: &str = "fk-dating_match-page_a_id";
static FK_DATING_MATCH_PAGE_B_ID: &str = "fk-dating_match-page_b_id";
static FK_DATING_MATCH_CHAT_ID: &str = "fk-dating_match-chat_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DatingMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(DatingMatch::Id))
                    .col(integer(DatingMatch::PageAId))
                    .col(integer(DatingMatch::PageBId))
                    .col(integer(DatingMatch::ChatId))
                    .col(timestamp(DatingMatch::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DATING_MATCH_PAGE_PAIR)
                    .table(DatingMatch::Table)
                    .col(DatingMatch::PageAId)
                    .col(DatingMatch::PageBId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DATING_MATCH_PAGE_B_ID)
                    .table(DatingMatch::Table)
                    .col(DatingMatch::PageBId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DATING_MATCH_PAGE_A_ID)
                    .from_tbl(DatingMatch::Table)
                    .from_col(DatingMatch::PageAId)
                    .to_tbl(DatingPage::Table)
                    .to_col(DatingPage::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DATING_MATCH_PAGE_B_ID)
                    .from_tbl(DatingMatch::Table)
                    .from_col(DatingMatch::PageBId)
                    .to_tbl(DatingPage::Table)
                    .to_col(DatingPage::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DATING_MATCH_CHAT_ID)
                    .from_tbl(DatingMatch::Table)
                    .from_col(DatingMatch::ChatId)
                    .to_tbl(Chat::Table)
                    .to_col(Chat::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DATING_MATCH_CHAT_ID)
                    .table(DatingMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DATING_MATCH_PAGE_B_ID)
                    .table(DatingMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DATING_MATCH_PAGE_A_ID)
                    .table(DatingMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DATING_MATCH_PAGE_B_ID)
                    .table(DatingMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DATING_MATCH_PAGE_PAIR)
                    .table(DatingMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DatingMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DatingMatch {
    Table,
    Id,
    PageAId,
    PageBId,
    ChatId,
    CreatedAt,
}

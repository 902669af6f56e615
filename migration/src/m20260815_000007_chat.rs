use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static IDX_CHAT_PAIR_ORIGIN: &str = "idx-chat-user_a_id-user_b_id-origin";
static IDX_CHAT_USER_B_ID: &str = "idx-chat-user_b_id";
static FK_CHAT_USER_A_ID: &str = "fk-chat-user_a_id";
static FK_CHAT_USER_B_ID: &str = "fk-chat-user_b_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chat::Table)
                    .if_not_exists()
                    .col(pk_auto(Chat::Id))
                    .col(integer(Chat::UserAId))
                    .col(integer(Chat::UserBId))
                    .col(string_len(Chat::Origin, 16))
                    .col(timestamp_null(Chat::LastMessageAt))
                    .col(timestamp(Chat::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_PAIR_ORIGIN)
                    .table(Chat::Table)
                    .col(Chat::UserAId)
                    .col(Chat::UserBId)
                    .col(Chat::Origin)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_USER_B_ID)
                    .table(Chat::Table)
                    .col(Chat::UserBId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAT_USER_A_ID)
                    .from_tbl(Chat::Table)
                    .from_col(Chat::UserAId)
                    .to_tbl(VelvetUser::Table)
                    .to_col(VelvetUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAT_USER_B_ID)
                    .from_tbl(Chat::Table)
                    .from_col(Chat::UserBId)
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
                    .name(FK_CHAT_USER_B_ID)
                    .table(Chat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAT_USER_A_ID)
                    .table(Chat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_USER_B_ID)
                    .table(Chat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_PAIR_ORIGIN)
                    .table(Chat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Chat::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Chat {
    Table,
    Id,
    UserAId,
    UserBId,
    Origin,
    LastMessageAt,
    CreatedAt,
}

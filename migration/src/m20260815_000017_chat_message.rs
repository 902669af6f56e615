use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_velvet_user::VelvetUser, m20260815_000007_chat::Chat};

static IDX_CHAT_MESSAGE_CHAT_ID: &str = "idx-chat_message-chat_id";
static FK_CHAT_MESSAGE_CHAT_ID: &str = "fk-chat_message-chat_id";
static FK_CHAT_MESSAGE_SENDER_ID: &str = "fk-chat_message-sender_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatMessage::Id))
                    .col(integer(ChatMessage::ChatId))
                    .col(integer(ChatMessage::SenderId))
                    .col(text(ChatMessage::Body))
                    .col(timestamp(ChatMessage::CreatedAt))
                    .col(timestamp_null(ChatMessage::ReadAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHAT_MESSAGE_CHAT_ID)
                    .table(ChatMessage::Table)
                    .col(ChatMessage::ChatId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAT_MESSAGE_CHAT_ID)
                    .from_tbl(ChatMessage::Table)
                    .from_col(ChatMessage::ChatId)
                    .to_tbl(Chat::Table)
                    .to_col(Chat::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHAT_MESSAGE_SENDER_ID)
                    .from_tbl(ChatMessage::Table)
                    .from_col(ChatMessage::SenderId)
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
                    .name(FK_CHAT_MESSAGE_SENDER_ID)
                    .table(ChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHAT_MESSAGE_CHAT_ID)
                    .table(ChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHAT_MESSAGE_CHAT_ID)
                    .table(ChatMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChatMessage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChatMessage {
    Table,
    Id,
    ChatId,
    SenderId,
    Body,
    CreatedAt,
    ReadAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static IDX_PUSH_SUBSCRIPTION_USER_ID: &str = "idx-push_subscription-user_id";
static FK_PUSH_SUBSCRIPTION_USER_ID: &str = "fk-push_subscription-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PushSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(PushSubscription::Id))
                    .col(integer(PushSubscription::UserId))
                    .col(string_uniq(PushSubscription::Endpoint))
                    .col(string(PushSubscription::P256dh))
                    .col(string(PushSubscription::Auth))
                    .col(timestamp(PushSubscription::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PUSH_SUBSCRIPTION_USER_ID)
                    .table(PushSubscription::Table)
                    .col(PushSubscription::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PUSH_SUBSCRIPTION_USER_ID)
                    .from_tbl(PushSubscription::Table)
                    .from_col(PushSubscription::UserId)
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
                    .name(FK_PUSH_SUBSCRIPTION_USER_ID)
                    .table(PushSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PUSH_SUBSCRIPTION_USER_ID)
                    .table(PushSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PushSubscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PushSubscription {
    Table,
    Id,
    UserId,
    Endpoint,
    P256dh,
    Auth,
    CreatedAt,
}

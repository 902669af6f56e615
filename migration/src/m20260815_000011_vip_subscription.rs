use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_velvet_user::VelvetUser, m20260815_000009_vip_page::VipPage};

static IDX_VIP_SUBSCRIPTION_PAGE_SUBSCRIBER: &str = "idx-vip_subscription-page_id-subscriber_id";
static IDX_VIP_SUBSCRIPTION_SUBSCRIBER_ID: &str = "idx-vip_subscription-subscriber_id";
static FK_VIP_SUBSCRIPTION_PAGE_ID: &str = "fk-vip_subscription-page_id";
static FK_VIP_SUBSCRIPTION_SUBSCRIBER_ID: &str = "fk-vip_subscription-subscriber_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VipSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(VipSubscription::Id))
                    .col(integer(VipSubscription::PageId))
                    .col(integer(VipSubscription::SubscriberId))
                    .col(string_len(VipSubscription::Status, 16))
                    .col(timestamp(VipSubscription::CurrentPeriodEnd))
                    .col(timestamp(VipSubscription::CreatedAt))
                    .col(timestamp(VipSubscription::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VIP_SUBSCRIPTION_PAGE_SUBSCRIBER)
                    .table(VipSubscription::Table)
                    .col(VipSubscription::PageId)
                    .col(VipSubscription::SubscriberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VIP_SUBSCRIPTION_SUBSCRIBER_ID)
                    .table(VipSubscription::Table)
                    .col(VipSubscription::SubscriberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VIP_SUBSCRIPTION_PAGE_ID)
                    .from_tbl(VipSubscription::Table)
                    .from_col(VipSubscription::PageId)
                    .to_tbl(VipPage::Table)
                    .to_col(VipPage::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VIP_SUBSCRIPTION_SUBSCRIBER_ID)
                    .from_tbl(VipSubscription::Table)
                    .from_col(VipSubscription::SubscriberId)
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
                    .name(FK_VIP_SUBSCRIPTION_SUBSCRIBER_ID)
                    .table(VipSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VIP_SUBSCRIPTION_PAGE_ID)
                    .table(VipSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VIP_SUBSCRIPTION_SUBSCRIBER_ID)
                    .table(VipSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VIP_SUBSCRIPTION_PAGE_SUBSCRIBER)
                    .table(VipSubscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VipSubscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum VipSubscription {
    Table,
    Id,
    PageId,
    SubscriberId,
    Status,
    CurrentPeriodEnd,
    CreatedAt,
    UpdatedAt,
}

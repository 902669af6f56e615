use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static FK_VIP_PAGE_OWNER_ID: &str = "fk-vip_page-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VipPage::Table)
                    .if_not_exists()
                    .col(pk_auto(VipPage::Id))
                    .col(integer_uniq(VipPage::OwnerId))
                    .col(string_uniq(VipPage::Handle))
                    .col(string(VipPage::Title))
                    .col(text(VipPage::Description))
                    .col(big_integer(VipPage::MonthlyPriceCents))
                    .col(timestamp(VipPage::CreatedAt))
                    .col(timestamp(VipPage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VIP_PAGE_OWNER_ID)
                    .from_tbl(VipPage::Table)
                    .from_col(VipPage::OwnerId)
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
                    .name(FK_VIP_PAGE_OWNER_ID)
                    .table(VipPage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(VipPage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VipPage {
    Table,
    Id,
    OwnerId,
    Handle,
    Title,
    Description,
    MonthlyPriceCents,
    CreatedAt,
    UpdatedAt,
}

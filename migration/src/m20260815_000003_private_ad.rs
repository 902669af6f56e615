use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static IDX_PRIVATE_AD_OWNER_ID: &str = "idx-private_ad-owner_id";
static IDX_PRIVATE_AD_CITY: &str = "idx-private_ad-city";
static IDX_PRIVATE_AD_EXPIRES_AT: &str = "idx-private_ad-expires_at";
static FK_PRIVATE_AD_OWNER_ID: &str = "fk-private_ad-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrivateAd::Table)
                    .if_not_exists()
                    .col(pk_auto(PrivateAd::Id))
                    .col(integer(PrivateAd::OwnerId))
                    .col(string(PrivateAd::Title))
                    .col(text(PrivateAd::Description))
                    .col(string(PrivateAd::Category))
                    .col(string(PrivateAd::City))
                    .col(big_integer(PrivateAd::PriceHourCents))
                    .col(string_null(PrivateAd::CoverUrl))
                    .col(boolean(PrivateAd::Active))
                    .col(timestamp(PrivateAd::ExpiresAt))
                    .col(timestamp(PrivateAd::CreatedAt))
                    .col(timestamp(PrivateAd::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRIVATE_AD_OWNER_ID)
                    .table(PrivateAd::Table)
                    .col(PrivateAd::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRIVATE_AD_CITY)
                    .table(PrivateAd::Table)
                    .col(PrivateAd::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRIVATE_AD_EXPIRES_AT)
                    .table(PrivateAd::Table)
                    .col(PrivateAd::ExpiresAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRIVATE_AD_OWNER_ID)
                    .from_tbl(PrivateAd::Table)
                    .from_col(PrivateAd::OwnerId)
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
                    .name(FK_PRIVATE_AD_OWNER_ID)
                    .table(PrivateAd::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRIVATE_AD_EXPIRES_AT)
                    .table(PrivateAd::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRIVATE_AD_CITY)
                    .table(PrivateAd::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRIVATE_AD_OWNER_ID)
                    .table(PrivateAd::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PrivateAd::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PrivateAd {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    Category,
    City,
    PriceHourCents,
    CoverUrl,
    Active,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260815_000001_velvet_user::VelvetUser, m20260815_000003_private_ad::PrivateAd};

static IDX_PRIVATE_OFFER_AD_ID: &str = "idx-private_offer-ad_id";
static IDX_PRIVATE_OFFER_CLIENT_ID: &str = "idx-private_offer-client_id";
static IDX_PRIVATE_OFFER_STATUS: &str = "idx-private_offer-status";
static FK_PRIVATE_OFFER_AD_ID: &str = "fk-private_offer-ad_id";
static FK_PRIVATE_OFFER_CLIENT_ID: &str = "fk-private_offer-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrivateOffer::Table)
                    .if_not_exists()
                    .col(pk_auto(PrivateOffer::Id))
                    .col(integer(PrivateOffer::AdId))
                    .col(integer(PrivateOffer::ClientId))
                    .col(string_len(PrivateOffer::Status, 16))
                    .col(big_integer(PrivateOffer::PriceCents))
                    .col(timestamp(PrivateOffer::StartsAt))
                    .col(integer(PrivateOffer::DurationMinutes))
                    .col(string(PrivateOffer::Location))
                    .col(text_null(PrivateOffer::Note))
                    .col(timestamp_null(PrivateOffer::CompletedAt))
                    .col(timestamp_null(PrivateOffer::ResolvedAt))
                    .col(timestamp(PrivateOffer::CreatedAt))
                    .col(timestamp(PrivateOffer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRIVATE_OFFER_AD_ID)
                    .table(PrivateOffer::Table)
                    .col(PrivateOffer::AdId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRIVATE_OFFER_CLIENT_ID)
                    .table(PrivateOffer::Table)
                    .col(PrivateOffer::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRIVATE_OFFER_STATUS)
                    .table(PrivateOffer::Table)
                    .col(PrivateOffer::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRIVATE_OFFER_AD_ID)
                    .from_tbl(PrivateOffer::Table)
                    .from_col(PrivateOffer::AdId)
                    .to_tbl(PrivateAd::Table)
                    .to_col(PrivateAd::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PRIVATE_OFFER_CLIENT_ID)
                    .from_tbl(PrivateOffer::Table)
                    .from_col(PrivateOffer::ClientId)
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
                    .name(FK_PRIVATE_OFFER_CLIENT_ID)
                    .table(PrivateOffer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PRIVATE_OFFER_AD_ID)
                    .table(PrivateOffer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRIVATE_OFFER_STATUS)
                    .table(PrivateOffer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRIVATE_OFFER_CLIENT_ID)
                    .table(PrivateOffer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRIVATE_OFFER_AD_ID)
                    .table(PrivateOffer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PrivateOffer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PrivateOffer {
    Table,
    Id,
    AdId,
    ClientId,
    Status,
    PriceCents,
    StartsAt,
    DurationMinutes,
    Location,
    Note,
    CompletedAt,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}

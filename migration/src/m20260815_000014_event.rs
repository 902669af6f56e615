use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_velvet_user::VelvetUser;

static IDX_EVENT_CITY: &str = "idx-event-city";
static IDX_EVENT_STARTS_AT: &str = "idx-event-starts_at";
static FK_EVENT_ORGANIZER_ID: &str = "fk-event-organizer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::OrganizerId))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(string(Event::Venue))
                    .col(string(Event::City))
                    .col(timestamp(Event::StartsAt))
                    .col(timestamp(Event::EndsAt))
                    .col(timestamp(Event::CreatedAt))
                    .col(timestamp(Event::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_CITY)
                    .table(Event::Table)
                    .col(Event::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_STARTS_AT)
                    .table(Event::Table)
                    .col(Event::StartsAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EVENT_ORGANIZER_ID)
                    .from_tbl(Event::Table)
                    .from_col(Event::OrganizerId)
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
                    .name(FK_EVENT_ORGANIZER_ID)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_STARTS_AT)
                    .table(Event::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_EVENT_CITY).table(Event::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    OrganizerId,
    Title,
    Description,
    Venue,
    City,
    StartsAt,
    EndsAt,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VelvetUser::Table)
                    .if_not_exists()
                    .col(pk_auto(VelvetUser::Id))
                    .col(string_uniq(VelvetUser::Email))
                    .col(string(VelvetUser::PasswordHash))
                    .col(string(VelvetUser::DisplayName))
                    .col(string_null(VelvetUser::City))
                    .col(text_null(VelvetUser::Bio))
                    .col(string_null(VelvetUser::AvatarUrl))
                    .col(timestamp(VelvetUser::CreatedAt))
                    .col(timestamp(VelvetUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VelvetUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum VelvetUser {
    Table,
    Id,
    Email,
    PasswordHash,
    DisplayName,
    City,
    Bio,
    AvatarUrl,
    CreatedAt,
    UpdatedAt,
}

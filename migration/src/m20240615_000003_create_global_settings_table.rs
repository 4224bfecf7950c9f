use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Single row table, the application always uses id 1
        manager
            .create_table(
                Table::create()
                    .table(GlobalSettings::Table)
                    .if_not_exists()
                    .col(integer(GlobalSettings::Id).primary_key())
                    .col(big_integer(GlobalSettings::GlobalGifsPerHour).default(0))
                    .col(timestamp(GlobalSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlobalSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GlobalSettings {
    Table,
    Id,
    GlobalGifsPerHour,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RandomPing::Table)
                    .if_not_exists()
                    .col(pk_auto(RandomPing::Id))
                    .col(string(RandomPing::GuildId))
                    .col(string(RandomPing::ChannelId))
                    .col(big_integer(RandomPing::IntervalSeconds))
                    .col(boolean(RandomPing::Active))
                    .col(timestamp(RandomPing::CreatedAt))
                    .col(timestamp(RandomPing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_random_ping_guild_channel")
                    .table(RandomPing::Table)
                    .col(RandomPing::GuildId)
                    .col(RandomPing::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_random_ping_guild_channel")
                    .table(RandomPing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RandomPing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RandomPing {
    Table,
    Id,
    GuildId,
    ChannelId,
    IntervalSeconds,
    Active,
    CreatedAt,
    UpdatedAt,
}

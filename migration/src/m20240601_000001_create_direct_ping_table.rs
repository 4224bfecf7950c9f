use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DirectPing::Table)
                    .if_not_exists()
                    .col(pk_auto(DirectPing::Id))
                    .col(string(DirectPing::GuildId))
                    .col(string(DirectPing::ChannelId))
                    .col(string(DirectPing::MemberId))
                    .col(big_integer(DirectPing::IntervalSeconds))
                    .col(boolean(DirectPing::Active))
                    .col(timestamp(DirectPing::CreatedAt))
                    .col(timestamp(DirectPing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One schedule per channel
        manager
            .create_index(
                Index::create()
                    .name("idx_direct_ping_guild_channel")
                    .table(DirectPing::Table)
                    .col(DirectPing::GuildId)
                    .col(DirectPing::ChannelId)
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
                    .name("idx_direct_ping_guild_channel")
                    .table(DirectPing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DirectPing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DirectPing {
    Table,
    Id,
    GuildId,
    ChannelId,
    MemberId,
    IntervalSeconds,
    Active,
    CreatedAt,
    UpdatedAt,
}

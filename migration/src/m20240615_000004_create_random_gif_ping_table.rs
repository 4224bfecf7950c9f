use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RandomGifPing::Table)
                    .if_not_exists()
                    .col(pk_auto(RandomGifPing::Id))
                    .col(string(RandomGifPing::GuildId))
                    .col(string(RandomGifPing::ChannelId))
                    .col(big_integer(RandomGifPing::IntervalSeconds))
                    .col(boolean(RandomGifPing::Active))
                    .col(timestamp(RandomGifPing::CreatedAt))
                    .col(timestamp(RandomGifPing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_random_gif_ping_guild_channel")
                    .table(RandomGifPing::Table)
                    .col(RandomGifPing::GuildId)
                    .col(RandomGifPing::ChannelId)
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
                    .name("idx_random_gif_ping_guild_channel")
                    .table(RandomGifPing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RandomGifPing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RandomGifPing {
    Table,
    Id,
    GuildId,
    ChannelId,
    IntervalSeconds,
    Active,
    CreatedAt,
    UpdatedAt,
}

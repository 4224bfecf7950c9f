//! Outbound chat platform capability.

use serenity::{
    all::{ChannelId, ChannelType, CreateEmbed, CreateMessage, GuildId},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::discord::{ChannelSummary, GuildSummary},
};

/// Largest member page Discord returns for a single request.
const MEMBER_PAGE_LIMIT: u64 = 1000;

/// Operations the bot performs against the chat platform.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends a message to a channel, optionally with an embedded image.
    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError>;

    /// Ids of the guild's members that are not bots.
    async fn list_non_bot_members(&self, guild_id: u64) -> Result<Vec<u64>, AppError>;

    /// Guilds the bot is a member of.
    async fn list_guilds(&self) -> Result<Vec<GuildSummary>, AppError>;

    /// Channels of a guild.
    async fn list_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError>;
}

/// [`ChatClient`] backed by serenity's REST client.
pub struct DiscordChatClient {
    http: Arc<Http>,
}

impl DiscordChatClient {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatClient for DiscordChatClient {
    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError> {
        let mut message = CreateMessage::new().content(content);
        if let Some(url) = image_url {
            message = message.embed(CreateEmbed::new().image(url));
        }

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }

    /// Only the first page of members is read, so pools in very large guilds are
    /// limited to the first 1000 members.
    async fn list_non_bot_members(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        let members = self
            .http
            .get_guild_members(GuildId::new(guild_id), Some(MEMBER_PAGE_LIMIT), None)
            .await?;

        Ok(members
            .into_iter()
            .filter(|member| !member.user.bot)
            .map(|member| member.user.id.get())
            .collect())
    }

    async fn list_guilds(&self) -> Result<Vec<GuildSummary>, AppError> {
        let guilds = self.http.get_guilds(None, None).await?;

        Ok(guilds
            .into_iter()
            .map(|guild| GuildSummary {
                id: guild.id.get(),
                name: guild.name,
            })
            .collect())
    }

    async fn list_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
        let channels = self.http.get_channels(GuildId::new(guild_id)).await?;

        Ok(channels
            .into_iter()
            .map(|channel| ChannelSummary {
                id: channel.id.get(),
                is_text: channel.kind == ChannelType::Text,
                name: channel.name,
            })
            .collect())
    }
}

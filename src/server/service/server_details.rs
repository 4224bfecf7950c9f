//! Guild diagnostics lookup.

use crate::server::{
    error::AppError,
    model::discord::ServerDetails,
    service::chat::ChatClient,
};

/// Channel looked up when the caller does not name one.
pub const DEFAULT_CHANNEL_NAME: &str = "general";

pub struct ServerDetailsService<'a> {
    chat: &'a dyn ChatClient,
}

impl<'a> ServerDetailsService<'a> {
    pub fn new(chat: &'a dyn ChatClient) -> Self {
        Self { chat }
    }

    /// Looks up a guild by name along with one of its text channels.
    ///
    /// # Arguments
    /// - `guild_name` - Exact name of a guild the bot is in
    /// - `channel_name` - Exact name of a text channel in that guild
    ///
    /// # Returns
    /// - `Ok(ServerDetails)` - Guild, matching channel, all channels and non-bot members
    /// - `Err(AppError::NotFound)` - The bot is not in a guild with that name
    /// - `Err(AppError)` - Discord API failure
    pub async fn lookup(
        &self,
        guild_name: &str,
        channel_name: &str,
    ) -> Result<ServerDetails, AppError> {
        let guild = self
            .chat
            .list_guilds()
            .await?
            .into_iter()
            .find(|guild| guild.name == guild_name)
            .ok_or_else(|| AppError::NotFound(format!("Guild '{}' not found", guild_name)))?;

        let channels = self.chat.list_channels(guild.id).await?;
        let channel = channels
            .iter()
            .find(|channel| channel.is_text && channel.name == channel_name)
            .cloned();
        let member_ids = self.chat.list_non_bot_members(guild.id).await?;

        Ok(ServerDetails {
            guild,
            channel,
            channels,
            member_ids,
        })
    }
}

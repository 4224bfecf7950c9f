//! Domain models for Discord lookups made through the chat client.

use crate::model::discord::{ChannelDto, GuildDto, ServerDetailsDto};

/// Guild the bot is a member of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSummary {
    pub id: u64,
    pub name: String,
}

impl GuildSummary {
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Channel within a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSummary {
    pub id: u64,
    pub name: String,
    /// Whether this is a regular guild text channel.
    pub is_text: bool,
}

impl ChannelSummary {
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
            is_text: self.is_text,
        }
    }
}

/// Snapshot of a guild as the bot sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDetails {
    pub guild: GuildSummary,
    /// The requested text channel, if the guild has one by that name.
    pub channel: Option<ChannelSummary>,
    pub channels: Vec<ChannelSummary>,
    pub member_ids: Vec<u64>,
}

impl ServerDetails {
    pub fn into_dto(self) -> ServerDetailsDto {
        ServerDetailsDto {
            guild: self.guild.into_dto(),
            channel: self.channel.map(ChannelSummary::into_dto),
            channels: self
                .channels
                .into_iter()
                .map(ChannelSummary::into_dto)
                .collect(),
            members: self.member_ids.iter().map(u64::to_string).collect(),
        }
    }
}

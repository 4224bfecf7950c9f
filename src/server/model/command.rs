//! Parsed slash command invocations.
//!
//! Converts serenity's [`CommandInteraction`] into the handful of values the dispatcher
//! actually reads, so the dispatch logic can be exercised without a full interaction
//! payload.

use serenity::all::{CommandDataOptionValue, CommandInteraction, Permissions};

use crate::server::model::ping::PingKind;

/// Option name carrying the member to ping.
pub const MEMBER_OPTION: &str = "member";
/// Option name carrying the interval in seconds.
pub const INTERVAL_OPTION: &str = "interval";

/// Slash commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Test,
    Start,
    Stop,
    StartRandomPing,
    StopRandomPing,
    StartGifPing,
    StopGifPing,
}

impl Command {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "test" => Some(Self::Test),
            "start" => Some(Self::Start),
            "stop" => Some(Self::Stop),
            "startrandomping" => Some(Self::StartRandomPing),
            "stoprandomping" => Some(Self::StopRandomPing),
            "startgifping" => Some(Self::StartGifPing),
            "stopgifping" => Some(Self::StopGifPing),
            _ => None,
        }
    }

    /// Ping kind a start/stop command operates on, `None` for `test`.
    pub fn ping_kind(self) -> Option<PingKind> {
        match self {
            Self::Test => None,
            Self::Start | Self::Stop => Some(PingKind::Direct),
            Self::StartRandomPing | Self::StopRandomPing => Some(PingKind::Random),
            Self::StartGifPing | Self::StopGifPing => Some(PingKind::RandomGif),
        }
    }

    pub fn is_start(self) -> bool {
        matches!(
            self,
            Self::Start | Self::StartRandomPing | Self::StartGifPing
        )
    }
}

/// The parts of a slash command interaction the dispatcher needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    pub name: String,
    /// `None` when the command was used in a DM.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Resolved permissions of the invoking member in the channel.
    pub permissions: Option<Permissions>,
    pub member_option: Option<u64>,
    pub interval_option: Option<i64>,
}

impl CommandInvocation {
    /// Extracts the invocation from a verified command interaction.
    pub fn from_interaction(interaction: &CommandInteraction) -> Self {
        let mut member_option = None;
        let mut interval_option = None;

        for option in &interaction.data.options {
            match (option.name.as_str(), &option.value) {
                (MEMBER_OPTION, CommandDataOptionValue::User(user_id)) => {
                    member_option = Some(user_id.get());
                }
                (INTERVAL_OPTION, CommandDataOptionValue::Integer(value)) => {
                    interval_option = Some(*value);
                }
                _ => {}
            }
        }

        Self {
            name: interaction.data.name.clone(),
            guild_id: interaction.guild_id.map(|id| id.get()),
            channel_id: interaction.channel_id.get(),
            permissions: interaction
                .member
                .as_ref()
                .and_then(|member| member.permissions),
            member_option,
            interval_option,
        }
    }

    /// Whether the invoking member may manage the guild.
    pub fn can_manage_guild(&self) -> bool {
        self.permissions
            .is_some_and(|permissions| permissions.contains(Permissions::MANAGE_GUILD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse("startgifping"), Some(Command::StartGifPing));
        assert_eq!(Command::parse("stop"), Some(Command::Stop));
        assert_eq!(Command::parse("challenge"), None);
    }

    #[test]
    fn maps_commands_to_kinds() {
        assert_eq!(Command::Start.ping_kind(), Some(PingKind::Direct));
        assert_eq!(Command::StopRandomPing.ping_kind(), Some(PingKind::Random));
        assert_eq!(Command::Test.ping_kind(), None);
        assert!(Command::StartGifPing.is_start());
        assert!(!Command::StopGifPing.is_start());
    }

    #[test]
    fn manage_guild_requires_bit() {
        let mut invocation = CommandInvocation {
            name: "stop".to_string(),
            guild_id: Some(1),
            channel_id: 2,
            permissions: Some(Permissions::SEND_MESSAGES),
            member_option: None,
            interval_option: None,
        };
        assert!(!invocation.can_manage_guild());

        invocation.permissions = Some(Permissions::SEND_MESSAGES | Permissions::MANAGE_GUILD);
        assert!(invocation.can_manage_guild());

        invocation.permissions = None;
        assert!(!invocation.can_manage_guild());
    }
}

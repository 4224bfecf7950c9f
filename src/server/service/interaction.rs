//! Slash command dispatch.
//!
//! Turns a verified interaction into exactly one reply. Every failure becomes chat
//! text: command errors use their own message, anything else is logged and answered
//! with a generic apology.

use serenity::all::{CreateInteractionResponse, CreateInteractionResponseMessage, Interaction};

use crate::server::{
    error::{command::CommandError, AppError},
    model::{
        command::{Command, CommandInvocation, INTERVAL_OPTION, MEMBER_OPTION},
        ping::{PingKind, StartPingParam},
    },
    service::schedule::SchedulingRegistry,
    util::emoji::random_emoji,
};

const GENERIC_FAILURE: &str = "Something went wrong on my end. Please try again later.";

pub struct InteractionService<'a> {
    registry: &'a SchedulingRegistry,
}

impl<'a> InteractionService<'a> {
    pub fn new(registry: &'a SchedulingRegistry) -> Self {
        Self { registry }
    }

    /// Builds the response for a verified interaction.
    ///
    /// Pings are answered with a pong; application commands with a channel message.
    pub async fn handle(&self, interaction: Interaction) -> CreateInteractionResponse {
        match interaction {
            Interaction::Ping(_) => CreateInteractionResponse::Pong,
            Interaction::Command(command) => {
                let invocation = CommandInvocation::from_interaction(&command);
                let content = self.handle_command(invocation).await;
                message(content)
            }
            other => {
                tracing::warn!("Unsupported interaction type {:?}", other.kind());
                message(CommandError::UnknownCommand(String::new()).to_string())
            }
        }
    }

    /// Runs a command and returns the reply text.
    pub async fn handle_command(&self, invocation: CommandInvocation) -> String {
        let err = match self.run(&invocation).await {
            Ok(content) => return content,
            Err(err) => err,
        };

        match err.as_command_error() {
            Some(CommandError::CorruptBudget { current, delta }) => {
                tracing::error!(
                    "/{} in channel {} hit corrupt GIF budget (total {}, change {})",
                    invocation.name,
                    invocation.channel_id,
                    current,
                    delta
                );
                err.to_string()
            }
            Some(CommandError::UnknownCommand(name)) => {
                tracing::warn!("Received unknown command /{}", name);
                err.to_string()
            }
            Some(command_err) => command_err.to_string(),
            None => {
                tracing::error!(
                    "/{} failed in channel {}: {}",
                    invocation.name,
                    invocation.channel_id,
                    err
                );
                GENERIC_FAILURE.to_string()
            }
        }
    }

    async fn run(&self, invocation: &CommandInvocation) -> Result<String, AppError> {
        let command = Command::parse(&invocation.name)
            .ok_or_else(|| CommandError::UnknownCommand(invocation.name.clone()))?;

        let Some(kind) = command.ping_kind() else {
            return Ok(format!("hello world {}", random_emoji()));
        };

        let guild_id = invocation.guild_id.ok_or(CommandError::GuildOnly)?;
        if !invocation.can_manage_guild() {
            return Err(CommandError::PermissionDenied.into());
        }

        let result = if command.is_start() {
            let interval_seconds = invocation
                .interval_option
                .ok_or(CommandError::MissingOption(INTERVAL_OPTION))?;
            let member_id = match kind {
                PingKind::Direct => Some(
                    invocation
                        .member_option
                        .ok_or(CommandError::MissingOption(MEMBER_OPTION))?,
                ),
                PingKind::Random | PingKind::RandomGif => None,
            };

            self.registry
                .start(StartPingParam {
                    kind,
                    guild_id,
                    channel_id: invocation.channel_id,
                    member_id,
                    interval_seconds,
                })
                .await?
        } else {
            self.registry
                .stop(kind, guild_id, invocation.channel_id)
                .await?
        };

        Ok(result.content)
    }
}

fn message(content: String) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content))
}

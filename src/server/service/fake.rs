//! In-memory stand-ins for the outbound capabilities, used by service tests.

use serenity::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use crate::server::{
    error::AppError,
    model::discord::{ChannelSummary, GuildSummary},
    service::{chat::ChatClient, gif::GifSource},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: u64,
    pub content: String,
    pub image_url: Option<String>,
}

/// Chat client that records sends and serves scripted guild data.
#[derive(Default)]
pub struct RecordingChatClient {
    sent: Mutex<Vec<SentMessage>>,
    members: HashMap<u64, Vec<u64>>,
    guilds: Vec<GuildSummary>,
    channels: HashMap<u64, Vec<ChannelSummary>>,
    fail_members: AtomicBool,
    member_lookups: Mutex<Vec<u64>>,
}

impl RecordingChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(mut self, guild_id: u64, members: Vec<u64>) -> Self {
        self.members.insert(guild_id, members);
        self
    }

    pub fn with_guild(mut self, id: u64, name: &str, channels: Vec<ChannelSummary>) -> Self {
        self.guilds.push(GuildSummary {
            id,
            name: name.to_string(),
        });
        self.channels.insert(id, channels);
        self
    }

    pub fn fail_member_lookups(&self) {
        self.fail_members.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Guild ids passed to `list_non_bot_members`, in call order.
    pub fn member_lookups(&self) -> Vec<u64> {
        self.member_lookups.lock().unwrap().clone()
    }

    /// Polls until at least `count` messages were sent or five seconds pass.
    pub async fn wait_for_sends(&self, count: usize) -> Vec<SentMessage> {
        for _ in 0..500 {
            if self.sent.lock().unwrap().len() >= count {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        self.sent()
    }
}

#[async_trait]
impl ChatClient for RecordingChatClient {
    async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentMessage {
            channel_id,
            content: content.to_string(),
            image_url: image_url.map(str::to_string),
        });
        Ok(())
    }

    async fn list_non_bot_members(&self, guild_id: u64) -> Result<Vec<u64>, AppError> {
        self.member_lookups.lock().unwrap().push(guild_id);
        if self.fail_members.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("member lookup failed".to_string()));
        }
        Ok(self.members.get(&guild_id).cloned().unwrap_or_default())
    }

    async fn list_guilds(&self) -> Result<Vec<GuildSummary>, AppError> {
        Ok(self.guilds.clone())
    }

    async fn list_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
        Ok(self.channels.get(&guild_id).cloned().unwrap_or_default())
    }
}

/// GIF source that always returns the same URL, or nothing.
pub struct StaticGifSource(pub Option<String>);

#[async_trait]
impl GifSource for StaticGifSource {
    async fn random_gif(&self) -> Option<String> {
        self.0.clone()
    }
}

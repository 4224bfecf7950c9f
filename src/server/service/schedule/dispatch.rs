//! A single ping delivery.

use rand::Rng;
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::ping::PingKind,
    service::{chat::ChatClient, gif::GifSource},
    util::emoji::random_emoji,
};

/// Who a schedule pings on each tick.
#[derive(Debug, Clone)]
pub enum PingTarget {
    /// Always the same member.
    Member(u64),
    /// A member drawn uniformly from a pool fixed when the schedule was created.
    Pool(Arc<Vec<u64>>),
}

impl PingTarget {
    fn pick(&self) -> Option<u64> {
        match self {
            Self::Member(member_id) => Some(*member_id),
            Self::Pool(pool) if pool.is_empty() => None,
            Self::Pool(pool) => {
                let mut rng = rand::rng();
                Some(pool[rng.random_range(0..pool.len())])
            }
        }
    }
}

/// Everything a timer tick needs to deliver one ping.
pub struct PingTask {
    kind: PingKind,
    channel_id: u64,
    target: PingTarget,
    chat: Arc<dyn ChatClient>,
    gifs: Arc<dyn GifSource>,
}

impl PingTask {
    pub fn new(
        kind: PingKind,
        channel_id: u64,
        target: PingTarget,
        chat: Arc<dyn ChatClient>,
        gifs: Arc<dyn GifSource>,
    ) -> Self {
        Self {
            kind,
            channel_id,
            target,
            chat,
            gifs,
        }
    }

    /// Delivers one ping. Failures are logged and never stop the schedule.
    pub async fn dispatch(&self) {
        if let Err(e) = self.try_dispatch().await {
            tracing::error!(
                "Failed to deliver {} ping to channel {}: {}",
                self.kind,
                self.channel_id,
                e
            );
        }
    }

    async fn try_dispatch(&self) -> Result<(), AppError> {
        let Some(member_id) = self.target.pick() else {
            tracing::warn!(
                "No members to pick from for {} ping in channel {}, skipping tick",
                self.kind,
                self.channel_id
            );
            return Ok(());
        };

        let content = format!("<@{}> {}", member_id, random_emoji());
        let image_url = match self.kind {
            PingKind::RandomGif => self.gifs.random_gif().await,
            PingKind::Direct | PingKind::Random => None,
        };

        self.chat
            .send_message(self.channel_id, &content, image_url.as_deref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::fake::{RecordingChatClient, StaticGifSource};

    fn task(
        kind: PingKind,
        target: PingTarget,
        chat: Arc<RecordingChatClient>,
        gif: Option<&str>,
    ) -> PingTask {
        PingTask::new(
            kind,
            7,
            target,
            chat,
            Arc::new(StaticGifSource(gif.map(str::to_string))),
        )
    }

    #[tokio::test]
    async fn direct_ping_mentions_member() {
        let chat = Arc::new(RecordingChatClient::new());

        task(PingKind::Direct, PingTarget::Member(42), chat.clone(), None)
            .dispatch()
            .await;

        let sent = chat.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel_id, 7);
        assert!(sent[0].content.starts_with("<@42> "));
        assert_eq!(sent[0].image_url, None);
    }

    #[tokio::test]
    async fn gif_ping_attaches_image() {
        let chat = Arc::new(RecordingChatClient::new());
        let pool = PingTarget::Pool(Arc::new(vec![5, 6]));

        task(PingKind::RandomGif, pool, chat.clone(), Some("https://gif"))
            .dispatch()
            .await;

        let sent = chat.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].content.starts_with("<@5> ") || sent[0].content.starts_with("<@6> "));
        assert_eq!(sent[0].image_url.as_deref(), Some("https://gif"));
    }

    #[tokio::test]
    async fn gif_ping_without_gif_still_sends() {
        let chat = Arc::new(RecordingChatClient::new());
        let pool = PingTarget::Pool(Arc::new(vec![5]));

        task(PingKind::RandomGif, pool, chat.clone(), None)
            .dispatch()
            .await;

        let sent = chat.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].image_url, None);
    }

    #[tokio::test]
    async fn empty_pool_skips_tick() {
        let chat = Arc::new(RecordingChatClient::new());
        let pool = PingTarget::Pool(Arc::new(Vec::new()));

        task(PingKind::Random, pool, chat.clone(), None)
            .dispatch()
            .await;

        assert!(chat.sent().is_empty());
    }
}

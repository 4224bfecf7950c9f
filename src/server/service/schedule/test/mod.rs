use crate::server::{
    data::{global_settings::GlobalSettingsRepository, ping::PingRepository},
    error::{command::CommandError, AppError},
    model::ping::{PingKind, StartPingParam},
    service::{
        budget::BudgetTracker,
        fake::{RecordingChatClient, StaticGifSource},
        schedule::SchedulingRegistry,
    },
};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait};
use std::{sync::Arc, time::Duration};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod concurrency;

const GUILD: u64 = 1;
const CEILING: i64 = 12;

struct Harness {
    _test: TestContext,
    db: DatabaseConnection,
    chat: Arc<RecordingChatClient>,
    registry: SchedulingRegistry,
}

impl Harness {
    async fn new(chat: RecordingChatClient) -> Self {
        let test = TestBuilder::new().with_ping_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let chat = Arc::new(chat);

        let budget = BudgetTracker::new(db.clone(), CEILING);
        budget.bootstrap().await.unwrap();

        let registry = SchedulingRegistry::new(
            db.clone(),
            chat.clone(),
            Arc::new(StaticGifSource(Some("https://media.giphy.com/test.gif".to_string()))),
            budget,
        )
        .await
        .unwrap();

        Self {
            _test: test,
            db,
            chat,
            registry,
        }
    }

    async fn with_members(members: Vec<u64>) -> Self {
        Self::new(RecordingChatClient::new().with_members(GUILD, members)).await
    }

    async fn budget_total(&self) -> i64 {
        self.registry.budget().current().await.unwrap()
    }

    async fn row_count(&self, kind: PingKind) -> u64 {
        match kind {
            PingKind::Direct => entity::prelude::DirectPing::find().count(&self.db).await,
            PingKind::Random => entity::prelude::RandomPing::find().count(&self.db).await,
            PingKind::RandomGif => entity::prelude::RandomGifPing::find().count(&self.db).await,
        }
        .unwrap()
    }

    /// Makes every insert and update on `table` fail while reads keep working.
    async fn reject_writes(&self, table: &str) {
        for event in ["INSERT", "UPDATE"] {
            self.db
                .execute_unprepared(&format!(
                    "CREATE TRIGGER reject_{table}_{event} BEFORE {event} ON {table} \
                     BEGIN SELECT RAISE(ABORT, 'writes rejected'); END"
                ))
                .await
                .unwrap();
        }
    }
}

fn direct(channel_id: u64, member_id: u64, interval_seconds: i64) -> StartPingParam {
    StartPingParam {
        kind: PingKind::Direct,
        guild_id: GUILD,
        channel_id,
        member_id: Some(member_id),
        interval_seconds,
    }
}

fn random(kind: PingKind, channel_id: u64, interval_seconds: i64) -> StartPingParam {
    StartPingParam {
        kind,
        guild_id: GUILD,
        channel_id,
        member_id: None,
        interval_seconds,
    }
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

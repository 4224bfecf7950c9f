mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing_subscriber::{filter::filter_fn, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::{
        budget::BudgetTracker,
        chat::{ChatClient, DiscordChatClient},
        gif::{GifSource, GiphyClient},
        schedule::SchedulingRegistry,
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        if *metadata.level() > tracing::Level::INFO {
            return false;
        }

        let target = metadata.target();
        !(target.starts_with("tokio_cron_scheduler") || target.starts_with("sqlx::query"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let discord_http = startup::setup_discord_http(&config);
    let verifier = Arc::new(startup::setup_verifier(&config)?);

    let budget = BudgetTracker::new(db.clone(), config.gif_pings_per_hour_limit);
    budget.bootstrap().await?;

    let chat: Arc<dyn ChatClient> = Arc::new(DiscordChatClient::new(discord_http));
    let gifs: Arc<dyn GifSource> = Arc::new(GiphyClient::new(
        http_client,
        config.giphy_api_key.clone(),
    ));

    let registry = SchedulingRegistry::new(db, chat.clone(), gifs, budget).await?;
    registry.reconcile_at_startup().await?;
    tracing::info!("{} ping schedules live", registry.active_count().await);

    let app = router::router()
        .with_state(AppState::new(registry, chat, verifier))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

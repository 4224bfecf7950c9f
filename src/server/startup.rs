use serenity::{http::Http, interactions_endpoint::Verifier};
use std::sync::Arc;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    util::parse::parse_public_key,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the ping and settings tables
/// exist. The process cannot serve commands without its store, so callers treat an error
/// here as fatal.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for Giphy lookups.
///
/// Redirects are disabled; Giphy answers the random endpoint directly.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Creates the Discord REST client authenticated with the bot token.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_token))
}

/// Creates the interaction signature verifier from the application's public key.
///
/// # Returns
/// - `Ok(Verifier)` - Verifier for the configured key
/// - `Err(AppError::ConfigErr)` - The key is not a valid Ed25519 public key
pub fn setup_verifier(config: &Config) -> Result<Verifier, AppError> {
    let invalid = || ConfigError::InvalidEnvVar {
        name: "DISCORD_PUBLIC_KEY".to_string(),
        reason: "not a valid Ed25519 public key".to_string(),
    };

    let key = parse_public_key(&config.discord_public_key).ok_or_else(invalid)?;
    let verifier = Verifier::try_new(key).map_err(|_| invalid())?;

    Ok(verifier)
}

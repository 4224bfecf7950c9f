use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::parse_public_key,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GIF_PINGS_PER_HOUR_LIMIT: i64 = 12;

pub struct Config {
    pub database_url: String,

    pub discord_token: String,
    pub discord_public_key: String,

    pub giphy_api_key: Option<String>,

    pub port: u16,
    /// Ceiling on the deployment-wide number of GIF pings per hour.
    pub gif_pings_per_hour_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_public_key = required("DISCORD_PUBLIC_KEY")?;
        if parse_public_key(&discord_public_key).is_none() {
            return Err(ConfigError::InvalidEnvVar {
                name: "DISCORD_PUBLIC_KEY".to_string(),
                reason: "expected 64 hexadecimal characters".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_token: required("DISCORD_TOKEN")?,
            discord_public_key,
            giphy_api_key: std::env::var("GIPHY_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            port: parsed_or("PORT", DEFAULT_PORT)?,
            gif_pings_per_hour_limit: parsed_or(
                "GIF_PINGS_PER_HOUR_LIMIT",
                DEFAULT_GIF_PINGS_PER_HOUR_LIMIT,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

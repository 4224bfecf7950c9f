//! Random GIF lookup.

use serde_json::Value;
use serenity::async_trait;
use url::Url;

use crate::server::error::AppError;

const GIPHY_RANDOM_URL: &str = "https://api.giphy.com/v1/gifs/random";
const GIF_TAG: &str = "dank meme";

/// Source of GIF image URLs for GIF pings.
#[async_trait]
pub trait GifSource: Send + Sync {
    /// Returns a random GIF URL, or `None` when none could be obtained.
    async fn random_gif(&self) -> Option<String>;
}

/// [`GifSource`] querying Giphy's random endpoint.
///
/// Without an API key every lookup yields `None`, so GIF pings still go out as plain
/// mentions.
pub struct GiphyClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl GiphyClient {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self { http, api_key }
    }

    async fn fetch(&self, api_key: &str) -> Result<Option<String>, AppError> {
        let url = Url::parse_with_params(
            GIPHY_RANDOM_URL,
            &[("api_key", api_key), ("tag", GIF_TAG)],
        )
        .map_err(|e| AppError::InternalError(format!("Invalid Giphy URL: {}", e)))?;

        let body: Value = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(original_image_url(&body))
    }
}

#[async_trait]
impl GifSource for GiphyClient {
    async fn random_gif(&self) -> Option<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("GIPHY_API_KEY is not set, sending GIF ping without a GIF");
            return None;
        };

        match self.fetch(api_key).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                tracing::warn!("Giphy returned no GIF for tag '{}'", GIF_TAG);
                None
            }
            Err(e) => {
                tracing::error!("Failed to fetch GIF from Giphy: {}", e);
                None
            }
        }
    }
}

/// Reads `data.images.original.url` from a Giphy random response.
///
/// Giphy answers with an empty `data` array when nothing matches the tag.
fn original_image_url(body: &Value) -> Option<String> {
    body.pointer("/data/images/original/url")
        .and_then(Value::as_str)
        .map(str::to_string)
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{
    error::AppError,
    service::server_details::{ServerDetailsService, DEFAULT_CHANNEL_NAME},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ServerDetailsQuery {
    pub guild: String,
    pub channel: Option<String>,
}

/// Returns the named guild, one of its text channels, all its channels and its
/// non-bot members.
pub async fn get_server_details(
    State(state): State<AppState>,
    Query(query): Query<ServerDetailsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let channel_name = query.channel.as_deref().unwrap_or(DEFAULT_CHANNEL_NAME);

    let details = ServerDetailsService::new(state.chat.as_ref())
        .lookup(&query.guild, channel_name)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

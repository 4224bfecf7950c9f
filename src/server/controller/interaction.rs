use axum::{body::Bytes, extract::State, http::HeaderMap, response::IntoResponse, Json};
use serenity::all::Interaction;

use crate::server::{
    error::AppError, middleware::signature::SignatureGuard,
    service::interaction::InteractionService, state::AppState,
};

/// Discord interactions webhook.
///
/// The body is read raw so the signature can be checked over the exact bytes Discord
/// signed before it is parsed.
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    SignatureGuard::new(&state.verifier).require(&headers, &body)?;

    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid interaction payload: {}", e)))?;

    let response = InteractionService::new(&state.registry)
        .handle(interaction)
        .await;

    Ok(Json(response))
}

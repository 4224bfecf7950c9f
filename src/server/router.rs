use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        health::ping, interaction::handle_interaction, server_details::get_server_details,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/interactions", post(handle_interaction))
        .route("/ping", get(ping))
        .route("/server-details", get(get_server_details))
}

use axum::{routing::get, Router};

use crate::server::{
    controller::{bot::get_bot_status, channel::get_channels},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/channels", get(get_channels))
        .route("/api/bot/status", get(get_bot_status))
}

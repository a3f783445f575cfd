use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::BotStatusDto,
    server::{error::AppError, state::AppState},
};

/// Report process liveness and the gateway connection state.
///
/// # Returns
/// - `200 OK` - `{"status": "running", "connection": "<state>"}`
pub async fn get_bot_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let connection = state.connection.state().await;

    Ok((
        StatusCode::OK,
        Json(BotStatusDto {
            status: "running".to_string(),
            connection: connection.as_str().to_string(),
        }),
    ))
}

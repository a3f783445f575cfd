use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::channel::ChannelDto,
    server::{data::channel::ChannelRepository, error::AppError, state::AppState},
};

/// List mirrored channels.
///
/// Returns every channel descriptor the bot has created or adopted since it
/// started, ordered by serial ID. The list is empty until the first
/// reconciliation has run.
///
/// # Returns
/// - `200 OK` - JSON array of channel descriptors
pub async fn get_channels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let channels: Vec<ChannelDto> = ChannelRepository::new(&state.store)
        .get_all()
        .await
        .into_iter()
        .map(|channel| channel.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(channels)))
}

use serenity::all::{Context, ResumedEvent, ShardStageUpdateEvent};

use crate::server::state::AppState;

/// Feeds shard stage changes into the connection state machine.
pub async fn handle_shard_stage_update(
    state: &AppState,
    _ctx: Context,
    event: ShardStageUpdateEvent,
) {
    state.connection.stage_changed(event.new).await;
}

/// A resumed session is ready again without a new `Ready` event.
pub async fn handle_resume(state: &AppState, _ctx: Context, _event: ResumedEvent) {
    state.connection.ready().await;
}

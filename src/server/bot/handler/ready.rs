//! Ready event handler.
//!
//! Fired after every successful identify, including reconnects that could not
//! resume. Each time it records the managed guild, marks the connection ready
//! and reconciles the guild. Reconciliation is idempotent, so repeated ready
//! events only repair what changed in between.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Context, Ready};

use crate::server::{
    bot::discord::SerenityGuild, service::reconcile::GuildReconciler, state::AppState,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Shared state holding the store and the connection tracker
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing the bot user and its guilds
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    state.connection.ready().await;

    let Some(guild) = ready.guilds.first() else {
        tracing::warn!("Bot is not a member of any guild, nothing to manage");
        return;
    };
    if ready.guilds.len() > 1 {
        tracing::warn!(
            "Bot is in {} guilds, managing only {}",
            ready.guilds.len(),
            guild.id
        );
    }

    let guild_id = guild.id.get();
    state.connection.set_guild_id(guild_id).await;

    let gateway = SerenityGuild::new(Arc::clone(&ctx.http), guild_id, ready.user.id.get());
    let report = GuildReconciler::new(&gateway, &state.store, state.prune_stale_channels)
        .run()
        .await;

    if report.changed_guild() {
        tracing::info!("Guild {} reconciled with changes", guild_id);
    } else {
        tracing::info!("Guild {} already up to date", guild_id);
    }
}

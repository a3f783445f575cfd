//! Application state shared by the bot's event handlers and the HTTP handlers.
//!
//! The state is built once at startup. The bot handler owns one clone and Axum
//! clones another for each request; every field is cheap to clone and clones
//! share the same underlying data.

use std::sync::Arc;

use crate::server::{
    bot::connection::ConnectionTracker,
    config::{Config, LinkConfig},
    data::store::MemStore,
};

#[derive(Clone)]
pub struct AppState {
    /// In-memory mirror of managed channels and per-guild ticket settings.
    pub store: MemStore,

    /// Gateway connection state and the managed guild, as reported to `/api/bot/status`.
    pub connection: ConnectionTracker,

    /// URLs returned by the static-link commands.
    pub links: Arc<LinkConfig>,

    /// Whether reconciliation deletes channels of the previous layout.
    pub prune_stale_channels: bool,
}

impl AppState {
    pub fn new(links: LinkConfig, prune_stale_channels: bool) -> Self {
        Self {
            store: MemStore::new(),
            connection: ConnectionTracker::new(),
            links: Arc::new(links),
            prune_stale_channels,
        }
    }

    /// Creates the startup state: an empty store and a disconnected bot.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.links.clone(), config.prune_stale_channels)
    }
}

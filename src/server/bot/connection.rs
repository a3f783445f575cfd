//! Gateway connection lifecycle.
//!
//! Serenity reports shard stage changes and `ready`/`resume` events; the tracker
//! folds them into a four-state machine that the status endpoint exposes. The
//! tracker also remembers which guild the bot manages, which is the first guild
//! listed in the `Ready` payload.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::ConnectionStage;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Ready,
    Reconnecting,
}

impl ConnectionState {
    /// Next state after the shard moved to `stage`.
    pub fn on_stage(self, stage: ConnectionStage) -> Self {
        match stage {
            ConnectionStage::Connected => Self::Ready,
            ConnectionStage::Disconnected => Self::Disconnected,
            ConnectionStage::Resuming => Self::Reconnecting,
            ConnectionStage::Connecting
            | ConnectionStage::Handshake
            | ConnectionStage::Identifying => match self {
                Self::Ready | Self::Reconnecting => Self::Reconnecting,
                Self::Disconnected | Self::Connecting => Self::Connecting,
            },
            _ => self,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Ready => "ready",
            Self::Reconnecting => "reconnecting",
        }
    }
}

/// Shared handle on the connection state and the managed guild.
#[derive(Clone)]
pub struct ConnectionTracker {
    state: Arc<RwLock<ConnectionState>>,
    guild_id: Arc<RwLock<Option<u64>>>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ConnectionState::Disconnected)),
            guild_id: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn state(&self) -> ConnectionState {
        *self.state.read().await
    }

    pub async fn connecting(&self) {
        self.transition(|_| ConnectionState::Connecting).await;
    }

    pub async fn ready(&self) {
        self.transition(|_| ConnectionState::Ready).await;
    }

    pub async fn disconnected(&self) {
        self.transition(|_| ConnectionState::Disconnected).await;
    }

    pub async fn stage_changed(&self, stage: ConnectionStage) {
        self.transition(|current| current.on_stage(stage)).await;
    }

    async fn transition(&self, next: impl FnOnce(ConnectionState) -> ConnectionState) {
        let mut state = self.state.write().await;
        let previous = *state;
        *state = next(previous);

        if previous != *state {
            tracing::info!(
                "Gateway connection {} -> {}",
                previous.as_str(),
                state.as_str()
            );
        }
    }

    /// The guild the bot manages, once `Ready` has been received.
    pub async fn guild_id(&self) -> Option<u64> {
        *self.guild_id.read().await
    }

    pub async fn set_guild_id(&self, guild_id: u64) {
        *self.guild_id.write().await = Some(guild_id);
    }

    /// Whether events from `guild_id` should be handled.
    pub async fn manages(&self, guild_id: u64) -> bool {
        self.guild_id().await == Some(guild_id)
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

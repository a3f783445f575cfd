use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::model::{channel::ChannelDescriptor, ticket::TicketSetting};

/// Channel records keyed by Discord channel ID, plus the serial counter for new rows.
#[derive(Default)]
pub(super) struct ChannelTable {
    pub(super) rows: HashMap<String, ChannelDescriptor>,
    pub(super) next_id: i32,
}

/// Process-lifetime key-value store.
///
/// Cloning is cheap; clones share the same maps.
#[derive(Clone, Default)]
pub struct MemStore {
    pub(super) channels: Arc<RwLock<ChannelTable>>,
    pub(super) ticket_settings: Arc<RwLock<HashMap<String, TicketSetting>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

//! Channel descriptor repository.
//!
//! Provides create/read/delete over the mirrored channel records. Records are
//! keyed by Discord channel ID; a second create for the same ID is a key conflict.

use crate::server::{
    data::store::MemStore,
    error::store::StoreError,
    model::channel::{ChannelDescriptor, CreateChannelParam},
};

pub struct ChannelRepository<'a> {
    store: &'a MemStore,
}

impl<'a> ChannelRepository<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Returns every mirrored channel ordered by serial ID.
    pub async fn get_all(&self) -> Vec<ChannelDescriptor> {
        let table = self.store.channels.read().await;
        let mut channels: Vec<ChannelDescriptor> = table.rows.values().cloned().collect();
        channels.sort_by_key(|channel| channel.id);
        channels
    }

    pub async fn get_by_discord_id(&self, discord_channel_id: &str) -> Option<ChannelDescriptor> {
        let table = self.store.channels.read().await;
        table.rows.get(discord_channel_id).cloned()
    }

    /// Finds the record for a configured (category, name) pair.
    ///
    /// This is the reconciliation key: it yields the channel ID the bot last
    /// created or adopted for that slot, whatever the channel is called now.
    pub async fn find_by_location(&self, category: &str, name: &str) -> Option<ChannelDescriptor> {
        let table = self.store.channels.read().await;
        table
            .rows
            .values()
            .filter(|channel| channel.category == category && channel.name == name)
            .min_by_key(|channel| channel.id)
            .cloned()
    }

    /// Mirrors a channel.
    ///
    /// # Returns
    /// - `Ok(ChannelDescriptor)` - The stored record with its assigned serial ID
    /// - `Err(StoreError::DuplicateChannel)` - The Discord channel ID is already stored
    pub async fn create(&self, param: CreateChannelParam) -> Result<ChannelDescriptor, StoreError> {
        let mut table = self.store.channels.write().await;

        if table.rows.contains_key(&param.discord_channel_id) {
            return Err(StoreError::DuplicateChannel(param.discord_channel_id));
        }

        table.next_id += 1;
        let channel = ChannelDescriptor {
            id: table.next_id,
            discord_channel_id: param.discord_channel_id,
            name: param.name,
            category: param.category,
            read_only: param.read_only,
        };
        table
            .rows
            .insert(channel.discord_channel_id.clone(), channel.clone());

        Ok(channel)
    }

    /// Deletes a record; returns whether one existed.
    pub async fn delete(&self, discord_channel_id: &str) -> bool {
        let mut table = self.store.channels.write().await;
        table.rows.remove(discord_channel_id).is_some()
    }
}

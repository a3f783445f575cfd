//! Ticket setting repository.
//!
//! At most one setting per guild; writes overwrite.

use chrono::Utc;

use crate::server::{
    data::store::MemStore,
    model::ticket::{TicketSetting, UpsertTicketSettingParam},
};

pub struct TicketSettingRepository<'a> {
    store: &'a MemStore,
}

impl<'a> TicketSettingRepository<'a> {
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    pub async fn get(&self, guild_id: &str) -> Option<TicketSetting> {
        let settings = self.store.ticket_settings.read().await;
        settings.get(guild_id).cloned()
    }

    /// Creates or replaces the guild's ticket setting.
    pub async fn upsert(&self, param: UpsertTicketSettingParam) -> TicketSetting {
        let setting = TicketSetting {
            guild_id: param.guild_id,
            message: param.message,
            updated_at: Utc::now(),
        };

        let mut settings = self.store.ticket_settings.write().await;
        settings.insert(setting.guild_id.clone(), setting.clone());

        setting
    }
}

//! Mirrored channel descriptors.
//!
//! A descriptor is written whenever the reconciler creates or adopts one of the
//! configured text channels. It doubles as the persisted reconciliation key: on the
//! next run the stored Discord ID is checked before falling back to a name lookup.

use crate::model::channel::ChannelDto;

/// Channel record held by the state store.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelDescriptor {
    /// Store-assigned serial ID.
    pub id: i32,
    /// Discord channel ID as a string (the store key).
    pub discord_channel_id: String,
    /// Channel name the reconciler expects.
    pub name: String,
    /// Name of the category the channel lives under.
    pub category: String,
    /// Whether members without the verified role are kept from writing.
    pub read_only: bool,
}

impl ChannelDescriptor {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            discord_channel_id: self.discord_channel_id,
            name: self.name,
            category: self.category,
            read_only: self.read_only,
        }
    }
}

/// Parameters for mirroring a channel into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateChannelParam {
    pub discord_channel_id: String,
    pub name: String,
    pub category: String,
    pub read_only: bool,
}

use serde::{Deserialize, Serialize};

/// Mirrored channel record as returned by `GET /api/channels`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDto {
    pub id: i32,
    pub discord_channel_id: String,
    pub name: String,
    pub category: String,
    pub read_only: bool,
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `GET /api/bot/status`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct BotStatusDto {
    /// Always `"running"` while the process serves requests.
    pub status: String,
    /// Current gateway connection state (`disconnected`, `connecting`, `ready`, `reconnecting`).
    pub connection: String,
}

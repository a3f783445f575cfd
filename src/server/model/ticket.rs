//! Ticket settings and submitted ticket requests.

use chrono::{DateTime, Utc};

/// Placeholder shown in the ticket description field when the guild has no setting.
pub const DEFAULT_TICKET_MESSAGE: &str = "Opisz dokładnie swój problem lub zamówienie...";

/// Per-guild ticket configuration set by `/setticketmessage`.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketSetting {
    /// Discord guild ID as a string (the store key).
    pub guild_id: String,
    /// Placeholder text for the description field of the ticket modal.
    pub message: String,
    /// When the setting was last written.
    pub updated_at: DateTime<Utc>,
}

/// Parameters for upserting a guild's ticket setting.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertTicketSettingParam {
    pub guild_id: String,
    pub message: String,
}

/// A submitted ticket modal, ready to be turned into a thread.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRequest {
    pub subject: String,
    pub description: String,
    pub author_id: u64,
    pub author_name: String,
    pub submitted_at: DateTime<Utc>,
}

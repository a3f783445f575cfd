//! Inbound interactions, flattened out of Serenity's per-kind structs.

use std::collections::HashMap;

/// Which family of interaction arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Command,
    Button,
    Modal,
}

/// The member who triggered the interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoker {
    pub user_id: u64,
    pub username: String,
    /// Empty when the interaction did not come from a guild member.
    pub role_ids: Vec<u64>,
}

/// Everything the interaction router needs to dispatch and handle one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRequest {
    pub kind: InteractionKind,
    /// Command name, button custom ID or modal custom ID.
    pub identifier: String,
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    pub invoker: Invoker,
    /// String command options by name.
    pub options: HashMap<String, String>,
    /// Modal text input values by custom ID.
    pub fields: HashMap<String, String>,
}

impl InteractionRequest {
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn field(&self, custom_id: &str) -> Option<&str> {
        self.fields.get(custom_id).map(String::as_str)
    }
}

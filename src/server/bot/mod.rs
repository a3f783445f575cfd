//! Discord bot integration.
//!
//! The bot connects to the gateway, reconciles the managed guild on every `ready`
//! and forwards member and interaction events to the service layer. It runs in a
//! separate tokio task so the HTTP facade is served independently of the gateway
//! connection.
//!
//! The managed guild is the first guild listed in the `Ready` payload; events from
//! any other guild are ignored.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Channel and role events of the managed guild
//! - `GUILD_MEMBERS` - Member join, update and removal events (privileged intent)
//! - `GUILD_MESSAGES` - Reading recent messages before posting the static embeds
//! - `MESSAGE_CONTENT` - Reading the content of those messages (privileged intent)
//!
//! Note: both privileged intents must be enabled in the Discord Developer Portal
//! for the bot application.

pub mod connection;
pub mod discord;
pub mod gateway;
pub mod handler;
pub mod responder;
pub mod start;

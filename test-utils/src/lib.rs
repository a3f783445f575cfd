//! Guildkeeper Test Utils
//!
//! Shared testing utilities for the guildkeeper bot. Services never talk to Discord
//! directly, so most tests run against an in-process fake guild. The pieces that do
//! touch Serenity types (conversions at the gateway boundary) need real Serenity model
//! structs, and this crate builds them the same way Discord would deliver them: by
//! deserializing JSON payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_role};
//! use serenity::all::ChannelType;
//!
//! let category = create_test_channel(10, 1, "lobby", ChannelType::Category, None);
//! let channel = create_test_channel(11, 1, "il-witamy", ChannelType::Text, Some(10));
//! let role = create_test_role(20, "Zweryfikowany", 0x2ecc71, 1);
//! ```

pub mod serenity;

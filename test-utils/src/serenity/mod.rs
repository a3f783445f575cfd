//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs (Role, GuildChannel, Member, User)
//! by deserializing JSON, simulating what Discord's API would return. Only the fields
//! the bot reads are customizable; everything else gets a sensible default.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod channel;
pub mod member;
pub mod role;

pub use channel::create_test_channel;
pub use member::{create_test_member, create_test_user};
pub use role::create_test_role;

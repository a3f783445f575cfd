//! Server-side domain models and parameter types.
//!
//! Domain models are what services work with. Serenity types are converted into
//! them at the gateway boundary (`guild`), stored records live in `channel` and
//! `ticket`, and outgoing Discord payloads are described by `message` and
//! `command` so that services never build Serenity builders themselves.

pub mod channel;
pub mod command;
pub mod guild;
pub mod interaction;
pub mod message;
pub mod ticket;

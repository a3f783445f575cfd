//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's event handlers and the data layer. They talk to
//! Discord only through [`GuildGateway`](crate::server::bot::gateway::GuildGateway)
//! and [`InteractionResponder`](crate::server::bot::gateway::InteractionResponder),
//! and describe outgoing messages with the payload types in `model::message`:
//!
//! - **Reconciliation**: Bringing the guild in line with `layout` on ready
//! - **Membership**: Join, leave and role-change handling
//! - **Interactions**: Routing and handling commands, buttons and modals

pub mod client_count;
pub mod command;
pub mod interaction;
pub mod layout;
pub mod membership;
pub mod notice;
pub mod reconcile;

#[cfg(test)]
mod test;

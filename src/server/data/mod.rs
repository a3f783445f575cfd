//! In-memory state store and its repositories.
//!
//! `MemStore` owns the two record maps (mirrored channels and per-guild ticket
//! settings) behind shared locks. Repositories borrow the store and expose the
//! operations for one record kind, mirroring the repository-per-domain layout of a
//! database-backed data layer. Nothing here survives a restart.

pub mod channel;
pub mod store;
pub mod ticket_setting;

#[cfg(test)]
mod test;

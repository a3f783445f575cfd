//! Server-side bot backend and HTTP facade.
//!
//! This module contains everything the process runs: the Discord bot that keeps the
//! community guild in its configured shape, the interaction handlers behind its
//! buttons, modals and slash commands, and a small read-only HTTP API over the
//! in-memory state store.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity event handlers, the gateway/responder traits and their Serenity implementations
//! - **Service Layer** (`service/`) - Reconciliation, interaction routing, membership events
//! - **Data Layer** (`data/`) - In-memory state store and its repositories
//! - **Model Layer** (`model/`) - Domain models shared by services, data and bot
//! - **Controller Layer** (`controller/`) - HTTP request handlers
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, connection tracker, links)
//! - **Startup** (`startup`) - HTTP listener setup
//! - **Router** (`router`) - Axum route configuration

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
pub mod test;

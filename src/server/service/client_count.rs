//! The live "client count" channel.
//!
//! One channel under the statistics category carries the number of distinct
//! members holding a tracked role in its name (`klienci-<N>`). It is refreshed on
//! ready and whenever a tracked role is granted or revoked, and only renamed when
//! the computed name differs from the current one.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::GuildGateway,
    error::AppError,
    model::guild::{find_role, ChannelInfo, MemberInfo, RoleInfo},
    service::layout::{
        client_count_name, counter_permissions, CLIENT_COUNT_PREFIX, COUNTER_CATEGORY,
        TRACKED_ROLES,
    },
};

/// Outcome of a counter refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterUpdate {
    /// The channel already had the right name.
    Unchanged(String),
    Renamed { from: String, to: String },
    Created(String),
    /// No counter channel exists and creation was not requested.
    Missing,
}

/// Counts distinct members holding at least one of `tracked_role_ids`.
pub fn count_clients(members: &[MemberInfo], tracked_role_ids: &[u64]) -> usize {
    members
        .iter()
        .filter(|member| tracked_role_ids.iter().any(|id| member.has_role(*id)))
        .map(|member| member.user_id)
        .collect::<HashSet<_>>()
        .len()
}

/// IDs of the tracked roles that exist in the guild.
pub fn tracked_role_ids(roles: &[RoleInfo]) -> Vec<u64> {
    TRACKED_ROLES
        .iter()
        .filter_map(|name| find_role(roles, name))
        .map(|role| role.id)
        .collect()
}

/// The counter channel, recognised by its name prefix.
pub fn find_counter_channel(channels: &[ChannelInfo]) -> Option<&ChannelInfo> {
    channels
        .iter()
        .filter(|channel| !channel.is_category() && channel.name.starts_with(CLIENT_COUNT_PREFIX))
        .min_by_key(|channel| channel.id)
}

pub struct ClientCountService<'a, G: GuildGateway> {
    gateway: &'a G,
}

impl<'a, G: GuildGateway> ClientCountService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Recomputes the client count and applies it to the counter channel.
    ///
    /// # Arguments
    /// - `create_if_missing` - Create the channel under the statistics category when
    ///   none exists (used by reconciliation; event handlers only rename)
    ///
    /// # Returns
    /// - `Ok(CounterUpdate)` - What was done to the channel
    /// - `Err(AppError::NotFound)` - Creation requested but the statistics category is missing
    /// - `Err(AppError)` - A Discord call failed
    pub async fn refresh(&self, create_if_missing: bool) -> Result<CounterUpdate, AppError> {
        let roles = self.gateway.roles().await?;
        let tracked = tracked_role_ids(&roles);
        let members = self.gateway.members().await?;
        let name = client_count_name(count_clients(&members, &tracked));

        let channels = self.gateway.channels().await?;

        match find_counter_channel(&channels) {
            Some(channel) if channel.name == name => {
                tracing::debug!("Client count channel already named {}", name);
                Ok(CounterUpdate::Unchanged(name))
            }
            Some(channel) => {
                self.gateway.rename_channel(channel.id, &name).await?;
                tracing::info!("Renamed client count channel {} -> {}", channel.name, name);
                Ok(CounterUpdate::Renamed {
                    from: channel.name.clone(),
                    to: name,
                })
            }
            None if create_if_missing => {
                let category = channels
                    .iter()
                    .find(|channel| channel.is_category() && channel.name == COUNTER_CATEGORY)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Category {} not found", COUNTER_CATEGORY))
                    })?;

                let rules = counter_permissions(self.gateway.guild_id());
                self.gateway
                    .create_text_channel(&name, category.id, &rules)
                    .await?;
                tracing::info!("Created client count channel {}", name);
                Ok(CounterUpdate::Created(name))
            }
            None => {
                tracing::debug!("No client count channel to update");
                Ok(CounterUpdate::Missing)
            }
        }
    }
}

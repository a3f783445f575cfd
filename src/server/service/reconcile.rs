//! Guild reconciliation.
//!
//! Brings the managed guild in line with `layout`: roles, categories, channels
//! with their permission overwrites, optional pruning of the previous
//! configuration generation, the client-count channel, the static channel posts
//! and the slash command set. Every step is best-effort; a failed Discord call is
//! logged and counted and the run carries on with whatever state it has.
//!
//! Text channels are identified by the stored descriptor for their configured
//! (category, name) slot first and by exact name under the category second, so a
//! channel renamed by hand is reported as drift instead of being duplicated.
//! Categories and roles are matched by name.

use std::collections::HashMap;

use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::GuildGateway,
    data::{channel::ChannelRepository, store::MemStore},
    error::store::StoreError,
    model::{
        channel::CreateChannelParam,
        guild::{find_role, ChannelInfo, RoleInfo},
        message::MessageSpec,
    },
    service::{
        client_count::{ClientCountService, CounterUpdate},
        command::command_set,
        layout::{
            channel_permissions, is_public, BASELINE_ROLES, GUILD_LAYOUT, LEGIT_CHECK_CHANNEL,
            MESSAGE_SCAN_LIMIT, RULES_CHANNEL, STALE_LAYOUT, TICKET_CHANNEL, VERIFICATION_CHANNEL,
            VERIFIED_ROLE,
        },
        notice::{legit_check_message, rules_message, ticket_intake_message, verification_message},
    },
};

/// Channels that carry one bot-authored post each.
const STATIC_POSTS: &[(&str, fn() -> MessageSpec)] = &[
    (RULES_CHANNEL, rules_message),
    (VERIFICATION_CHANNEL, verification_message),
    (LEGIT_CHECK_CHANNEL, legit_check_message),
    (TICKET_CHANNEL, ticket_intake_message),
];

/// A configured channel whose stored identity no longer matches its name or place.
#[derive(Debug, Clone, PartialEq)]
pub struct Drift {
    pub channel_id: u64,
    pub expected_category: String,
    pub expected_name: String,
    pub actual_name: String,
    pub actual_parent_id: Option<u64>,
}

/// What a reconciliation run changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    pub created_roles: usize,
    pub created_categories: usize,
    pub created_channels: usize,
    pub deleted_channels: usize,
    pub deleted_categories: usize,
    pub posted_messages: usize,
    pub counter: Option<CounterUpdate>,
    pub registered_commands: usize,
    pub drift: Vec<Drift>,
    /// Failed external calls; each skipped its own step only.
    pub failures: usize,
}

impl ReconcileReport {
    /// Whether the run created, deleted or posted anything.
    pub fn changed_guild(&self) -> bool {
        self.created_roles
            + self.created_categories
            + self.created_channels
            + self.deleted_channels
            + self.deleted_categories
            + self.posted_messages
            > 0
            || matches!(
                self.counter,
                Some(CounterUpdate::Created(_)) | Some(CounterUpdate::Renamed { .. })
            )
    }
}

pub struct GuildReconciler<'a, G: GuildGateway> {
    gateway: &'a G,
    store: &'a MemStore,
    prune_stale: bool,
}

impl<'a, G: GuildGateway> GuildReconciler<'a, G> {
    /// # Arguments
    /// - `gateway` - The managed guild
    /// - `store` - State store holding the channel mirror
    /// - `prune_stale` - Delete channels and categories of the previous generation
    pub fn new(gateway: &'a G, store: &'a MemStore, prune_stale: bool) -> Self {
        Self {
            gateway,
            store,
            prune_stale,
        }
    }

    /// Runs every reconciliation step in dependency order.
    ///
    /// Roles come first because channel overwrites reference the verified role,
    /// categories before the channels they parent, and the message-exists checks
    /// before any post.
    pub async fn run(&self) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        let roles = self.ensure_roles(&mut report).await;
        let verified_role_id = find_role(&roles, VERIFIED_ROLE).map(|role| role.id);
        if verified_role_id.is_none() {
            tracing::warn!(
                "Role {} unavailable, member-only channels get no allow overwrite",
                VERIFIED_ROLE
            );
        }

        match self.gateway.channels().await {
            Ok(mut channels) => {
                let categories = self.ensure_categories(&mut channels, &mut report).await;
                let channel_ids = self
                    .ensure_channels(&mut channels, &categories, verified_role_id, &mut report)
                    .await;

                if self.prune_stale {
                    self.prune_stale_channels(&mut channels, &mut report).await;
                }

                match ClientCountService::new(self.gateway).refresh(true).await {
                    Ok(update) => report.counter = Some(update),
                    Err(e) => {
                        tracing::error!("Failed to refresh client count channel: {}", e);
                        report.failures += 1;
                    }
                }

                self.ensure_static_posts(&channel_ids, &mut report).await;
            }
            Err(e) => {
                tracing::error!("Failed to fetch guild channels, skipping channel steps: {}", e);
                report.failures += 1;
            }
        }

        match self.gateway.register_commands(command_set()).await {
            Ok(count) => {
                report.registered_commands = count;
                tracing::info!("Registered {} guild commands", count);
            }
            Err(e) => {
                tracing::error!("Failed to register guild commands: {}", e);
                report.failures += 1;
            }
        }

        tracing::info!(
            "Reconciliation finished: {} roles, {} categories, {} channels created, {} channels and {} categories deleted, {} messages posted, {} drifted, {} failures",
            report.created_roles,
            report.created_categories,
            report.created_channels,
            report.deleted_channels,
            report.deleted_categories,
            report.posted_messages,
            report.drift.len(),
            report.failures
        );

        report
    }

    /// Creates missing baseline roles and returns the guild's roles.
    async fn ensure_roles(&self, report: &mut ReconcileReport) -> Vec<RoleInfo> {
        let mut roles = match self.gateway.roles().await {
            Ok(roles) => roles,
            Err(e) => {
                tracing::error!("Failed to fetch guild roles: {}", e);
                report.failures += 1;
                return Vec::new();
            }
        };

        for name in BASELINE_ROLES {
            if find_role(&roles, name).is_some() {
                continue;
            }

            match self.gateway.create_role(name).await {
                Ok(role) => {
                    tracing::info!("Created role: {}", name);
                    report.created_roles += 1;
                    roles.push(role);
                }
                Err(e) => {
                    tracing::error!("Failed to create role {}: {}", name, e);
                    report.failures += 1;
                }
            }
        }

        roles
    }

    /// Creates missing categories; returns category name → ID for the configured ones.
    async fn ensure_categories(
        &self,
        channels: &mut Vec<ChannelInfo>,
        report: &mut ReconcileReport,
    ) -> HashMap<&'static str, u64> {
        let mut categories = HashMap::new();

        for layout in GUILD_LAYOUT {
            let existing = channels
                .iter()
                .find(|channel| channel.is_category() && channel.name == layout.name)
                .map(|channel| channel.id);

            if let Some(id) = existing {
                categories.insert(layout.name, id);
                continue;
            }

            match self.gateway.create_category(layout.name).await {
                Ok(category) => {
                    tracing::info!("Created category: {}", layout.name);
                    report.created_categories += 1;
                    categories.insert(layout.name, category.id);
                    channels.push(category);
                }
                Err(e) => {
                    tracing::error!("Failed to create category {}: {}", layout.name, e);
                    report.failures += 1;
                }
            }
        }

        categories
    }

    /// Creates or adopts every configured channel, applies its overwrites and
    /// mirrors it; returns channel name → ID.
    async fn ensure_channels(
        &self,
        channels: &mut Vec<ChannelInfo>,
        categories: &HashMap<&'static str, u64>,
        verified_role_id: Option<u64>,
        report: &mut ReconcileReport,
    ) -> HashMap<&'static str, u64> {
        let everyone_id = self.gateway.guild_id();
        let mut channel_ids = HashMap::new();

        for layout in GUILD_LAYOUT {
            let Some(&category_id) = categories.get(layout.name) else {
                tracing::warn!("Category {} unavailable, skipping its channels", layout.name);
                continue;
            };

            for &name in layout.channels {
                let rules = channel_permissions(name, everyone_id, verified_role_id);

                let channel_id = match self
                    .resolve_channel(channels, layout.name, category_id, name, report)
                    .await
                {
                    Some(id) => {
                        for rule in &rules {
                            if let Err(e) = self.gateway.set_permission(id, *rule).await {
                                tracing::error!("Failed to update permissions of {}: {}", name, e);
                                report.failures += 1;
                            }
                        }
                        id
                    }
                    None => match self
                        .gateway
                        .create_text_channel(name, category_id, &rules)
                        .await
                    {
                        Ok(channel) => {
                            tracing::info!("Created channel: {}", name);
                            report.created_channels += 1;
                            let id = channel.id;
                            channels.push(channel);
                            id
                        }
                        Err(e) => {
                            tracing::error!("Failed to create channel {}: {}", name, e);
                            report.failures += 1;
                            continue;
                        }
                    },
                };

                channel_ids.insert(name, channel_id);
                self.mirror_channel(channel_id, name, layout.name).await;
            }
        }

        channel_ids
    }

    /// Finds the guild channel filling a configured slot.
    ///
    /// The stored descriptor wins when its channel still exists, even if the
    /// channel was renamed or moved (recorded as drift). A descriptor whose
    /// channel vanished is dropped. Otherwise the channel is adopted by exact
    /// name under the category.
    async fn resolve_channel(
        &self,
        channels: &[ChannelInfo],
        category: &str,
        category_id: u64,
        name: &str,
        report: &mut ReconcileReport,
    ) -> Option<u64> {
        let repo = ChannelRepository::new(self.store);

        if let Some(stored) = repo.find_by_location(category, name).await {
            let live = stored
                .discord_channel_id
                .parse::<u64>()
                .ok()
                .and_then(|id| channels.iter().find(|channel| channel.id == id));

            if let Some(channel) = live {
                if channel.name != name || channel.parent_id != Some(category_id) {
                    tracing::warn!(
                        "Channel {} expected as {}/{} is now named '{}' (parent {:?})",
                        channel.id,
                        category,
                        name,
                        channel.name,
                        channel.parent_id
                    );
                    report.drift.push(Drift {
                        channel_id: channel.id,
                        expected_category: category.to_string(),
                        expected_name: name.to_string(),
                        actual_name: channel.name.clone(),
                        actual_parent_id: channel.parent_id,
                    });
                }
                return Some(channel.id);
            }

            tracing::debug!(
                "Stored channel {} for {}/{} no longer exists",
                stored.discord_channel_id,
                category,
                name
            );
            repo.delete(&stored.discord_channel_id).await;
        }

        channels
            .iter()
            .find(|channel| {
                !channel.is_category() && channel.name == name && channel.parent_id == Some(category_id)
            })
            .map(|channel| channel.id)
    }

    async fn mirror_channel(&self, channel_id: u64, name: &str, category: &str) {
        let repo = ChannelRepository::new(self.store);
        let result = repo
            .create(CreateChannelParam {
                discord_channel_id: channel_id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                read_only: !is_public(name),
            })
            .await;

        match result {
            Ok(_) => {}
            Err(StoreError::DuplicateChannel(_)) => {
                tracing::debug!("Channel {} already mirrored", name);
            }
        }
    }

    /// Deletes channels of the previous generation, then their categories once empty.
    async fn prune_stale_channels(
        &self,
        channels: &mut Vec<ChannelInfo>,
        report: &mut ReconcileReport,
    ) {
        let repo = ChannelRepository::new(self.store);

        for layout in STALE_LAYOUT {
            let Some(category_id) = channels
                .iter()
                .find(|channel| channel.is_category() && channel.name == layout.name)
                .map(|channel| channel.id)
            else {
                continue;
            };

            for &name in layout.channels {
                let stale: Vec<u64> = channels
                    .iter()
                    .filter(|channel| {
                        !channel.is_category()
                            && channel.name == name
                            && channel.parent_id == Some(category_id)
                    })
                    .map(|channel| channel.id)
                    .collect();

                for id in stale {
                    match self.gateway.delete_channel(id).await {
                        Ok(()) => {
                            tracing::info!("Deleted stale channel: {}", name);
                            report.deleted_channels += 1;
                            channels.retain(|channel| channel.id != id);
                            repo.delete(&id.to_string()).await;
                        }
                        Err(e) => {
                            tracing::error!("Failed to delete stale channel {}: {}", name, e);
                            report.failures += 1;
                        }
                    }
                }
            }

            if channels
                .iter()
                .any(|channel| channel.parent_id == Some(category_id))
            {
                tracing::debug!("Stale category {} still has channels, keeping it", layout.name);
                continue;
            }

            match self.gateway.delete_channel(category_id).await {
                Ok(()) => {
                    tracing::info!("Deleted stale category: {}", layout.name);
                    report.deleted_categories += 1;
                    channels.retain(|channel| channel.id != category_id);
                }
                Err(e) => {
                    tracing::error!("Failed to delete stale category {}: {}", layout.name, e);
                    report.failures += 1;
                }
            }
        }
    }

    /// Posts each static message unless the bot already posted in that channel.
    async fn ensure_static_posts(
        &self,
        channel_ids: &HashMap<&'static str, u64>,
        report: &mut ReconcileReport,
    ) {
        let bot_id = self.gateway.bot_user_id();

        for (name, build) in STATIC_POSTS {
            let Some(&channel_id) = channel_ids.get(name) else {
                tracing::warn!("Channel {} unavailable, skipping its message", name);
                continue;
            };

            match self
                .gateway
                .recent_message_authors(channel_id, MESSAGE_SCAN_LIMIT)
                .await
            {
                Ok(authors) if authors.contains(&bot_id) => {
                    tracing::debug!("Message already present in {}", name);
                }
                Ok(_) => match self.gateway.send_message(channel_id, build()).await {
                    Ok(_) => {
                        tracing::info!("Posted message in {}", name);
                        report.posted_messages += 1;
                    }
                    Err(e) => {
                        tracing::error!("Failed to post message in {}: {}", name, e);
                        report.failures += 1;
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read recent messages of {}: {}", name, e);
                    report.failures += 1;
                }
            }
        }
    }
}

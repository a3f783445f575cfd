//! The desired shape of the guild.
//!
//! Everything the reconciler creates is listed here: categories and their channels,
//! the previous configuration generation that may be pruned, the public channels,
//! the baseline roles and the client-count channel.

use serenity::all::Permissions;

use crate::server::model::guild::PermissionRule;

/// A category and the text channels it holds, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryLayout {
    pub name: &'static str,
    pub channels: &'static [&'static str],
}

pub const WELCOME_CHANNEL: &str = "il-witamy";
pub const VERIFICATION_CHANNEL: &str = "il-weryfikacja";
pub const RULES_CHANNEL: &str = "il-regulamin";
pub const LEGIT_CHECK_CHANNEL: &str = "il-czy-legit";
pub const TICKET_CHANNEL: &str = "il-tickety";

pub const GUILD_LAYOUT: &[CategoryLayout] = &[
    CategoryLayout {
        name: "lobby",
        channels: &[WELCOME_CHANNEL, VERIFICATION_CHANNEL],
    },
    CategoryLayout {
        name: "info",
        channels: &[RULES_CHANNEL, "il-ogłoszenia"],
    },
    CategoryLayout {
        name: "RESELLER",
        channels: &["il-ressell-info", "il-ressell-lista"],
    },
    CategoryLayout {
        name: "legitki",
        channels: &["il-legit", "il-opinie", LEGIT_CHECK_CHANNEL],
    },
    CategoryLayout {
        name: "zakup",
        channels: &["il-aplikacja", TICKET_CHANNEL],
    },
    CategoryLayout {
        name: COUNTER_CATEGORY,
        channels: &[],
    },
];

/// Previous configuration generation, removed when pruning is enabled.
pub const STALE_LAYOUT: &[CategoryLayout] = &[
    CategoryLayout {
        name: "konkursy",
        channels: &["il-konkursy"],
    },
    CategoryLayout {
        name: "boosty",
        channels: &["il-boosty"],
    },
    CategoryLayout {
        name: "xd",
        channels: &["il-xd"],
    },
];

/// Channels everyone can read and write, verified or not.
pub const PUBLIC_CHANNELS: &[&str] = &[WELCOME_CHANNEL, VERIFICATION_CHANNEL];

pub const VERIFIED_ROLE: &str = "Zweryfikowany";
pub const UNVERIFIED_ROLE: &str = "Niezweryfikowany";
pub const CLIENT_ROLE: &str = "Klient";
pub const PANEL_ROLE: &str = "Panel";

/// Roles created when missing. Never deleted.
pub const BASELINE_ROLES: &[&str] = &[
    VERIFIED_ROLE,
    UNVERIFIED_ROLE,
    "CEO",
    CLIENT_ROLE,
    "Admin",
    PANEL_ROLE,
];

/// Roles whose holders are counted in the client-count channel name.
pub const TRACKED_ROLES: &[&str] = &[CLIENT_ROLE];

pub const COUNTER_CATEGORY: &str = "statystyki";
pub const CLIENT_COUNT_PREFIX: &str = "klienci-";

/// How many recent messages are scanned for an earlier bot post.
pub const MESSAGE_SCAN_LIMIT: u8 = 50;

pub fn is_public(channel: &str) -> bool {
    PUBLIC_CHANNELS.contains(&channel)
}

/// Whether a channel name belongs to the bot's own layout, current or stale,
/// including the client counter.
pub fn is_managed_channel(name: &str) -> bool {
    GUILD_LAYOUT
        .iter()
        .chain(STALE_LAYOUT)
        .any(|layout| layout.channels.contains(&name))
        || name.starts_with(CLIENT_COUNT_PREFIX)
}

pub fn client_count_name(count: usize) -> String {
    format!("{}{}", CLIENT_COUNT_PREFIX, count)
}

/// Permission overwrites for a configured channel.
///
/// Public channels let `@everyone` view and send. Every other channel is hidden
/// from `@everyone` and opened to the verified role.
pub fn channel_permissions(
    channel: &str,
    everyone_id: u64,
    verified_role_id: Option<u64>,
) -> Vec<PermissionRule> {
    let view_and_send = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

    if is_public(channel) {
        return vec![PermissionRule::allow(everyone_id, view_and_send)];
    }

    let mut rules = vec![PermissionRule::deny(everyone_id, Permissions::VIEW_CHANNEL)];
    if let Some(role_id) = verified_role_id {
        rules.push(PermissionRule::allow(role_id, view_and_send));
    }
    rules
}

/// Permission overwrites for the client-count channel: visible, not writable.
pub fn counter_permissions(everyone_id: u64) -> Vec<PermissionRule> {
    vec![PermissionRule {
        role_id: everyone_id,
        allow: Permissions::VIEW_CHANNEL,
        deny: Permissions::SEND_MESSAGES,
    }]
}

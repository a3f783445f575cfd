//! Live guild state as seen through the gateway.
//!
//! These are lightweight snapshots of the Serenity models the services need. The
//! reconciler always re-derives its decisions from them; they are never stored.

use dioxus_logger::tracing;
use serenity::all::{ChannelType, GuildChannel, Member, Permissions, Role};

/// The subset of Discord channel types the bot distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Category,
    Text,
    Thread,
    Other,
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Category => Self::Category,
            ChannelType::Text | ChannelType::News => Self::Text,
            ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread => {
                Self::Thread
            }
            _ => Self::Other,
        }
    }
}

/// A guild channel, category or thread.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
    /// Parent category for channels, parent channel for threads.
    pub parent_id: Option<u64>,
}

impl ChannelInfo {
    /// Converts a Serenity guild channel at the gateway boundary.
    pub fn from_guild_channel(channel: &GuildChannel) -> Self {
        Self {
            id: channel.id.get(),
            name: channel.name.clone(),
            kind: channel.kind.into(),
            parent_id: channel.parent_id.map(|id| id.get()),
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind == ChannelKind::Category
    }
}

/// A guild role.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleInfo {
    pub id: u64,
    pub name: String,
}

impl RoleInfo {
    pub fn from_role(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
        }
    }
}

/// A guild member with the role IDs they currently hold.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub user_id: u64,
    pub username: String,
    /// Nickname, global name or username, in that order of preference.
    pub display_name: String,
    pub role_ids: Vec<u64>,
}

impl MemberInfo {
    pub fn from_member(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            username: member.user.name.clone(),
            display_name: member.display_name().to_string(),
            role_ids: member.roles.iter().map(|id| id.get()).collect(),
        }
    }

    /// Discord mention markup for the member.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}

/// A role-targeted permission overwrite.
///
/// The `@everyone` role shares its ID with the guild, so overwrites for everyone
/// use the guild ID as `role_id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermissionRule {
    pub role_id: u64,
    pub allow: Permissions,
    pub deny: Permissions,
}

impl PermissionRule {
    pub fn allow(role_id: u64, allow: Permissions) -> Self {
        Self {
            role_id,
            allow,
            deny: Permissions::empty(),
        }
    }

    pub fn deny(role_id: u64, deny: Permissions) -> Self {
        Self {
            role_id,
            allow: Permissions::empty(),
            deny,
        }
    }
}

/// Resolves a role by exact name.
///
/// When several roles share the name, the oldest one (lowest snowflake) wins and
/// the ambiguity is logged.
pub fn find_role<'a>(roles: &'a [RoleInfo], name: &str) -> Option<&'a RoleInfo> {
    let mut matches: Vec<&RoleInfo> = roles.iter().filter(|role| role.name == name).collect();
    matches.sort_by_key(|role| role.id);

    if matches.len() > 1 {
        tracing::warn!(
            "{} roles are named '{}', using the oldest ({})",
            matches.len(),
            name,
            matches[0].id
        );
    }

    matches.first().copied()
}

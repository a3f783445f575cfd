use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::server::{
    bot::handler::managed_guild,
    model::guild::MemberInfo,
    service::{client_count::CounterUpdate, membership::MembershipService},
    state::AppState,
};

fn role_ids(member: &Member) -> Vec<u64> {
    member.roles.iter().map(|role| role.get()).collect()
}

fn log_counter_update(update: Option<CounterUpdate>) {
    if let Some(CounterUpdate::Renamed { from, to }) = update {
        tracing::debug!("Client count updated {} -> {}", from, to);
    }
}

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(state: &AppState, ctx: Context, new_member: Member) {
    let Some(gateway) = managed_guild(state, &ctx, new_member.guild_id).await else {
        return;
    };

    // Kept current by GUILD_CREATE and member add/remove events
    let cached_member_count = ctx
        .cache
        .guild(new_member.guild_id)
        .map(|guild| guild.member_count);

    let member = MemberInfo::from_member(&new_member);
    if let Err(e) = MembershipService::new(&gateway)
        .on_join(&member, cached_member_count)
        .await
    {
        tracing::error!("Failed to welcome member {}: {}", member.username, e);
    }
}

/// Handles the guild_member_update event, refreshing the client count when a
/// tracked role was granted or revoked
pub async fn handle_guild_member_update(
    state: &AppState,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let Some(gateway) = managed_guild(state, &ctx, event.guild_id).await else {
        return;
    };

    let before = old.as_ref().map(role_ids);
    let after: Vec<u64> = event.roles.iter().map(|role| role.get()).collect();

    match MembershipService::new(&gateway)
        .on_roles_changed(before.as_deref(), &after)
        .await
    {
        Ok(update) => log_counter_update(update),
        Err(e) => tracing::error!(
            "Failed to refresh client count after update of {}: {}",
            event.user.name,
            e
        ),
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    state: &AppState,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    let Some(gateway) = managed_guild(state, &ctx, guild_id).await else {
        return;
    };

    let held = member_data_if_available.as_ref().map(role_ids);

    match MembershipService::new(&gateway)
        .on_leave(held.as_deref())
        .await
    {
        Ok(update) => log_counter_update(update),
        Err(e) => tracing::error!(
            "Failed to refresh client count after {} left: {}",
            user.name,
            e
        ),
    }
}

use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, GuildId, GuildMemberUpdateEvent, Interaction, Member, Ready,
    ResumedEvent, ShardStageUpdateEvent, User,
};
use serenity::async_trait;

use crate::server::{bot::discord::SerenityGuild, state::AppState};

pub mod connection;
pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

/// Gateway for the managed guild, or `None` when `guild_id` is not managed.
pub(super) async fn managed_guild(
    state: &AppState,
    ctx: &Context,
    guild_id: GuildId,
) -> Option<SerenityGuild> {
    if !state.connection.manages(guild_id.get()).await {
        return None;
    }

    let bot_user_id = ctx.cache.current_user().id.get();
    Some(SerenityGuild::new(
        Arc::clone(&ctx.http),
        guild_id.get(),
        bot_user_id,
    ))
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when the gateway session was resumed after a reconnect
    async fn resume(&self, ctx: Context, event: ResumedEvent) {
        connection::handle_resume(&self.state, ctx, event).await;
    }

    /// Called when a shard moves between connection stages
    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        connection::handle_shard_stage_update(&self.state, ctx, event).await;
    }

    /// Called for every slash command, component click and modal submission
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.state, ctx, new_member).await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.state, ctx, old, new, event).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.state,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }
}

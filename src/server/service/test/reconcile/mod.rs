use serenity::all::Permissions;

use crate::server::{
    data::{channel::ChannelRepository, store::MemStore},
    model::channel::CreateChannelParam,
    service::{
        client_count::CounterUpdate,
        layout::{
            channel_permissions, GUILD_LAYOUT, LEGIT_CHECK_CHANNEL, RULES_CHANNEL, TICKET_CHANNEL,
            VERIFICATION_CHANNEL, VERIFIED_ROLE, WELCOME_CHANNEL,
        },
        reconcile::GuildReconciler,
        test::GUILD_ID,
    },
    test::FakeGuild,
};

mod adopt;
mod failure;
mod messages;
mod prune;
mod run;

async fn seed_descriptor(store: &MemStore, discord_channel_id: u64, category: &str, name: &str) {
    ChannelRepository::new(store)
        .create(CreateChannelParam {
            discord_channel_id: discord_channel_id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            read_only: true,
        })
        .await
        .unwrap();
}

fn configured_channel_count() -> usize {
    GUILD_LAYOUT.iter().map(|layout| layout.channels.len()).sum()
}

/// Overwrites applied to the configured channels once the verified role exists.
fn configured_overwrite_count() -> usize {
    GUILD_LAYOUT
        .iter()
        .flat_map(|layout| layout.channels.iter())
        .map(|name| channel_permissions(name, GUILD_ID, Some(1)).len())
        .sum()
}

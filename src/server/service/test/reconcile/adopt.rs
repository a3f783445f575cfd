use super::*;

/// Tests adopting a pre-existing channel by name.
///
/// Verifies that an existing channel under the right category is reused and gets
/// its overwrites re-applied.
///
/// Expected: no duplicate channel, overwrites present on the existing channel
#[tokio::test]
async fn adopts_existing_channel_by_name() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "lobby")
        .with_channel(11, WELCOME_CHANNEL, 10);
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(guild.channel_named(WELCOME_CHANNEL).id, 11);
    assert_eq!(report.created_channels, configured_channel_count() - 1);
    assert!(guild.overwrite(11, GUILD_ID).is_some());
    assert!(ChannelRepository::new(&store)
        .get_by_discord_id("11")
        .await
        .is_some());
}

/// Tests that a channel with a configured name under another category is not adopted.
///
/// Expected: a new channel is created under the configured category
#[tokio::test]
async fn ignores_same_name_in_other_category() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "lobby")
        .with_category(20, "archiwum")
        .with_channel(21, WELCOME_CHANNEL, 20);
    let store = MemStore::new();

    GuildReconciler::new(&guild, &store, false).run().await;

    let welcome: Vec<_> = guild
        .channels_named(WELCOME_CHANNEL)
        .into_iter()
        .filter(|channel| channel.parent_id == Some(10))
        .collect();
    assert_eq!(welcome.len(), 1);
    assert_ne!(welcome[0].id, 21);
}

/// Tests that a hand-renamed channel is recognised through its stored descriptor.
///
/// Expected: the renamed channel is kept, reported as drift and not duplicated
#[tokio::test]
async fn reports_drift_for_renamed_channel() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "lobby")
        .with_channel(300, "witamy-stare", 10);
    let store = MemStore::new();
    seed_descriptor(&store, 300, "lobby", WELCOME_CHANNEL).await;

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert!(guild.channels_named(WELCOME_CHANNEL).is_empty());
    assert_eq!(report.drift.len(), 1);
    let drift = &report.drift[0];
    assert_eq!(drift.channel_id, 300);
    assert_eq!(drift.expected_name, WELCOME_CHANNEL);
    assert_eq!(drift.actual_name, "witamy-stare");
    assert!(guild.overwrite(300, GUILD_ID).is_some());
}

/// Tests that a descriptor whose channel was deleted is replaced.
///
/// Expected: stale record dropped, existing same-name channel adopted and mirrored
#[tokio::test]
async fn replaces_descriptor_of_deleted_channel() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "lobby")
        .with_channel(301, WELCOME_CHANNEL, 10);
    let store = MemStore::new();
    seed_descriptor(&store, 999, "lobby", WELCOME_CHANNEL).await;

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    let repo = ChannelRepository::new(&store);
    assert!(repo.get_by_discord_id("999").await.is_none());
    assert!(repo.get_by_discord_id("301").await.is_some());
    assert!(report.drift.is_empty());
    assert_eq!(guild.channels_named(WELCOME_CHANNEL).len(), 1);
}

/// Tests role resolution when a role name is duplicated.
///
/// Expected: no extra role created, overwrites reference the oldest duplicate
#[tokio::test]
async fn uses_oldest_duplicate_role() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_role(41, VERIFIED_ROLE)
        .with_role(40, VERIFIED_ROLE);
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.created_roles, 5);
    let rules = guild.channel_named(RULES_CHANNEL);
    assert!(guild.overwrite(rules.id, 40).is_some());
    assert!(guild.overwrite(rules.id, 41).is_none());
}

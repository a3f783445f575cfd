use super::*;

/// Tests reconciling an empty guild.
///
/// Verifies that roles, categories, channels, the counter channel, the static posts
/// and the command set are all created in one run.
///
/// Expected: every configured object created once and mirrored in the store
#[tokio::test]
async fn builds_empty_guild() {
    let guild = FakeGuild::new(GUILD_ID);
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.created_roles, 6);
    assert_eq!(report.created_categories, GUILD_LAYOUT.len());
    assert_eq!(report.created_channels, configured_channel_count());
    assert_eq!(report.posted_messages, 4);
    assert_eq!(report.registered_commands, 7);
    assert_eq!(report.counter, Some(CounterUpdate::Created("klienci-0".to_string())));
    assert_eq!(report.failures, 0);
    assert!(report.drift.is_empty());

    for layout in GUILD_LAYOUT {
        let category = guild.channel_named(layout.name);
        assert!(category.is_category());
        for name in layout.channels {
            assert_eq!(guild.channel_named(name).parent_id, Some(category.id));
        }
    }

    let mirrored = ChannelRepository::new(&store).get_all().await;
    assert_eq!(mirrored.len(), configured_channel_count());
}

/// Tests that a second run against an unchanged guild only re-applies overwrites.
///
/// Expected: nothing created, renamed or posted; exactly one overwrite write per
/// configured rule; store unchanged
#[tokio::test]
async fn second_run_changes_nothing() {
    let guild = FakeGuild::new(GUILD_ID);
    let store = MemStore::new();
    let reconciler = GuildReconciler::new(&guild, &store, false);

    reconciler.run().await;
    let writes = guild.state().writes;
    let permission_writes = guild.state().permission_writes;
    let mirrored = ChannelRepository::new(&store).get_all().await;

    let report = reconciler.run().await;

    assert!(!report.changed_guild());
    assert_eq!(report.created_channels, 0);
    assert_eq!(report.posted_messages, 0);
    assert_eq!(report.counter, Some(CounterUpdate::Unchanged("klienci-0".to_string())));
    assert_eq!(guild.state().writes, writes);
    assert_eq!(
        guild.state().permission_writes - permission_writes,
        configured_overwrite_count()
    );
    assert_eq!(ChannelRepository::new(&store).get_all().await, mirrored);

    for layout in GUILD_LAYOUT {
        assert_eq!(guild.channels_named(layout.name).len(), 1);
        for name in layout.channels {
            assert_eq!(guild.channels_named(name).len(), 1);
        }
    }
}

/// Tests the permission overwrites of configured channels.
///
/// Expected: public channels open to @everyone; others hidden from @everyone and
/// opened to the verified role
#[tokio::test]
async fn applies_visibility_overwrites() {
    let guild = FakeGuild::new(GUILD_ID);
    let store = MemStore::new();

    GuildReconciler::new(&guild, &store, false).run().await;

    let verified = guild.role_named(VERIFIED_ROLE);
    let view_and_send = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

    for name in [WELCOME_CHANNEL, VERIFICATION_CHANNEL] {
        let channel = guild.channel_named(name);
        let everyone = guild.overwrite(channel.id, GUILD_ID).unwrap();
        assert!(everyone.allow.contains(view_and_send));
    }

    for name in [RULES_CHANNEL, LEGIT_CHECK_CHANNEL, TICKET_CHANNEL] {
        let channel = guild.channel_named(name);
        let everyone = guild.overwrite(channel.id, GUILD_ID).unwrap();
        assert!(everyone.deny.contains(Permissions::VIEW_CHANNEL));
        let member = guild.overwrite(channel.id, verified.id).unwrap();
        assert!(member.allow.contains(view_and_send));
    }
}

/// Tests that the store flags member-only channels as read-only.
///
/// Expected: public channels readOnly=false, the rest readOnly=true
#[tokio::test]
async fn mirrors_read_only_flag() {
    let guild = FakeGuild::new(GUILD_ID);
    let store = MemStore::new();

    GuildReconciler::new(&guild, &store, false).run().await;

    let repo = ChannelRepository::new(&store);
    let welcome = guild.channel_named(WELCOME_CHANNEL);
    let rules = guild.channel_named(RULES_CHANNEL);

    let welcome = repo.get_by_discord_id(&welcome.id.to_string()).await.unwrap();
    assert!(!welcome.read_only);
    assert_eq!(welcome.category, "lobby");

    let rules = repo.get_by_discord_id(&rules.id.to_string()).await.unwrap();
    assert!(rules.read_only);
}

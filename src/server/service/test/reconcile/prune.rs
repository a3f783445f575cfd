use super::*;

fn guild_with_stale_layout() -> FakeGuild {
    FakeGuild::new(GUILD_ID)
        .with_category(20, "konkursy")
        .with_channel(21, "il-konkursy", 20)
        .with_category(22, "boosty")
        .with_channel(23, "il-boosty", 22)
        .with_channel(24, "pamiatki", 22)
}

/// Tests pruning the previous configuration generation.
///
/// Expected: stale channels deleted, empty stale categories deleted, categories
/// still holding other channels kept
#[tokio::test]
async fn prunes_stale_channels_when_enabled() {
    let guild = guild_with_stale_layout();
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, true).run().await;

    assert_eq!(report.deleted_channels, 2);
    assert_eq!(report.deleted_categories, 1);

    let deleted = guild.state().deleted_channels.clone();
    assert!(deleted.contains(&21));
    assert!(deleted.contains(&20));
    assert!(deleted.contains(&23));
    assert!(!deleted.contains(&22));
    assert!(!deleted.contains(&24));
}

/// Tests that pruning is off by default.
///
/// Expected: no channel or category deleted
#[tokio::test]
async fn keeps_stale_channels_when_disabled() {
    let guild = guild_with_stale_layout();
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.deleted_channels, 0);
    assert_eq!(report.deleted_categories, 0);
    assert!(guild.state().deleted_channels.is_empty());
}

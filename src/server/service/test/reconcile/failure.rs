use super::*;

/// Tests that a failed channel listing skips the channel steps only.
///
/// Expected: one failure, commands still registered, no channel created
#[tokio::test]
async fn channel_listing_failure_still_registers_commands() {
    let guild = FakeGuild::new(GUILD_ID).failing("channels");
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.failures, 1);
    assert_eq!(report.created_channels, 0);
    assert_eq!(report.registered_commands, 7);
    assert_eq!(report.created_roles, 6);
}

/// Tests reconciliation without the verified role.
///
/// Expected: role creation failures counted, channels still created with only the
/// @everyone overwrite
#[tokio::test]
async fn continues_when_roles_cannot_be_created() {
    let guild = FakeGuild::new(GUILD_ID).failing("create_role");
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.created_roles, 0);
    assert_eq!(report.failures, 6);
    assert_eq!(report.created_channels, configured_channel_count());

    let rules = guild.channel_named(RULES_CHANNEL);
    let overwrites = guild.state().overwrites.get(&rules.id).cloned().unwrap();
    assert_eq!(overwrites.len(), 1);
    assert_eq!(overwrites[0].role_id, GUILD_ID);
}

/// Tests that a failed post does not stop the remaining posts.
///
/// Expected: every post attempt fails and is counted; commands still registered
#[tokio::test]
async fn post_failures_are_counted() {
    let guild = FakeGuild::new(GUILD_ID).failing("send_message");
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.posted_messages, 0);
    assert_eq!(report.failures, 4);
    assert_eq!(report.registered_commands, 7);
}

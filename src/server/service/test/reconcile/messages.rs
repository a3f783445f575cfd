use super::*;
use crate::server::test::guild::BOT_USER_ID;

/// Tests the duplicate-post guard.
///
/// Verifies that a channel whose recent history holds a bot message gets no new post.
///
/// Expected: rules channel skipped, the three other static posts sent
#[tokio::test]
async fn skips_channel_with_bot_post() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "info")
        .with_channel(11, RULES_CHANNEL, 10)
        .with_message(11, BOT_USER_ID);
    let store = MemStore::new();

    let report = GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(report.posted_messages, 3);
    assert!(guild.bot_messages(11).is_empty());
    assert_eq!(
        guild
            .bot_messages(guild.channel_named(TICKET_CHANNEL).id)
            .len(),
        1
    );
}

/// Tests that messages from other users do not satisfy the guard.
///
/// Expected: the static post is sent
#[tokio::test]
async fn posts_when_only_others_wrote() {
    let guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "info")
        .with_channel(11, RULES_CHANNEL, 10)
        .with_message(11, 77);
    let store = MemStore::new();

    GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(guild.bot_messages(11).len(), 1);
}

/// Tests the scan window of the guard.
///
/// Expected: a bot post older than the 50 most recent messages is not seen, so the
/// message is posted again
#[tokio::test]
async fn bot_post_outside_scan_window_is_reposted() {
    let mut guild = FakeGuild::new(GUILD_ID)
        .with_category(10, "info")
        .with_channel(11, RULES_CHANNEL, 10)
        .with_message(11, BOT_USER_ID);
    for _ in 0..50 {
        guild = guild.with_message(11, 77);
    }
    let store = MemStore::new();

    GuildReconciler::new(&guild, &store, false).run().await;

    assert_eq!(guild.bot_messages(11).len(), 1);
}

/// Tests the verification post.
///
/// Expected: carries the verify button
#[tokio::test]
async fn verification_post_has_button() {
    let guild = FakeGuild::new(GUILD_ID);
    let store = MemStore::new();

    GuildReconciler::new(&guild, &store, false).run().await;

    let channel = guild.channel_named(VERIFICATION_CHANNEL);
    let posts = guild.bot_messages(channel.id);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].buttons[0].custom_id, "verify_button");
}

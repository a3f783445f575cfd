use super::*;

/// Tests looking up the record for a configured slot.
///
/// Expected: matches on both category and name
#[tokio::test]
async fn finds_by_category_and_name() {
    let store = MemStore::new();
    let repo = ChannelRepository::new(&store);

    repo.create(param("111", "il-witamy", "lobby")).await.unwrap();
    repo.create(param("222", "il-witamy", "info")).await.unwrap();

    let found = repo.find_by_location("info", "il-witamy").await.unwrap();
    assert_eq!(found.discord_channel_id, "222");

    assert!(repo.find_by_location("zakup", "il-witamy").await.is_none());
    assert!(repo.find_by_location("lobby", "il-weryfikacja").await.is_none());
}

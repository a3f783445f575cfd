use super::*;

/// Tests deleting a mirrored channel.
///
/// Expected: true on first delete, false afterwards, record gone
#[tokio::test]
async fn deletes_existing_channel() {
    let store = MemStore::new();
    let repo = ChannelRepository::new(&store);

    repo.create(param("111", "il-witamy", "lobby")).await.unwrap();

    assert!(repo.delete("111").await);
    assert!(!repo.delete("111").await);
    assert!(repo.get_by_discord_id("111").await.is_none());
}

/// Tests re-creating a channel after deletion.
///
/// Expected: the key is free again and a fresh serial ID is assigned
#[tokio::test]
async fn key_is_reusable_after_delete() {
    let store = MemStore::new();
    let repo = ChannelRepository::new(&store);

    repo.create(param("111", "il-witamy", "lobby")).await.unwrap();
    repo.delete("111").await;

    let recreated = repo.create(param("111", "il-witamy", "lobby")).await.unwrap();
    assert_eq!(recreated.id, 2);
}

use super::*;

/// Tests mirroring a new channel.
///
/// Verifies that the record is stored under its Discord ID and receives a serial ID.
///
/// Expected: Ok with id 1, retrievable by Discord ID
#[tokio::test]
async fn stores_new_channel() {
    let store = MemStore::new();
    let repo = ChannelRepository::new(&store);

    let created = repo
        .create(param("111", "il-witamy", "lobby"))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "il-witamy");
    assert_eq!(repo.get_by_discord_id("111").await, Some(created));
}

/// Tests serial ID assignment and listing order.
///
/// Expected: IDs increase with each insert and get_all returns them in order
#[tokio::test]
async fn assigns_increasing_serial_ids() {
    let store = MemStore::new();
    let repo = ChannelRepository::new(&store);

    repo.create(param("300", "il-regulamin", "info")).await.unwrap();
    repo.create(param("100", "il-witamy", "lobby")).await.unwrap();
    repo.create(param("200", "il-weryfikacja", "lobby")).await.unwrap();

    let all = repo.get_all().await;
    let ids: Vec<i32> = all.iter().map(|c| c.id).collect();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(names, vec!["il-regulamin", "il-witamy", "il-weryfikacja"]);
}

/// Tests inserting the same Discord channel twice.
///
/// Expected: Err(StoreError::DuplicateChannel) and the original record untouched
#[tokio::test]
async fn rejects_duplicate_discord_id() {
    let store = MemStore::new();
    let repo = ChannelRepository::new(&store);

    repo.create(param("111", "il-witamy", "lobby")).await.unwrap();
    let result = repo.create(param("111", "renamed", "lobby")).await;

    assert_eq!(result, Err(StoreError::DuplicateChannel("111".to_string())));
    assert_eq!(repo.get_all().await.len(), 1);
    assert_eq!(
        repo.get_by_discord_id("111").await.map(|c| c.name),
        Some("il-witamy".to_string())
    );
}

/// Tests that repository clones of the store share state.
///
/// Expected: a record created through one store handle is visible through another
#[tokio::test]
async fn store_clones_share_records() {
    let store = MemStore::new();
    let shared = store.clone();

    ChannelRepository::new(&store)
        .create(param("111", "il-witamy", "lobby"))
        .await
        .unwrap();

    assert!(ChannelRepository::new(&shared)
        .get_by_discord_id("111")
        .await
        .is_some());
}

use super::*;

/// Tests storing a ticket message for a guild.
///
/// Expected: the setting is returned and readable by guild ID
#[tokio::test]
async fn stores_setting() {
    let store = MemStore::new();
    let repo = TicketSettingRepository::new(&store);

    assert!(repo.get("1").await.is_none());

    let setting = repo
        .upsert(UpsertTicketSettingParam {
            guild_id: "1".to_string(),
            message: "Podaj numer zamówienia".to_string(),
        })
        .await;

    assert_eq!(setting.message, "Podaj numer zamówienia");
    assert_eq!(repo.get("1").await, Some(setting));
}

/// Tests overwriting an existing setting.
///
/// Expected: one setting per guild holding the latest message; other guilds unaffected
#[tokio::test]
async fn overwrites_previous_setting() {
    let store = MemStore::new();
    let repo = TicketSettingRepository::new(&store);

    for message in ["pierwsza", "druga"] {
        repo.upsert(UpsertTicketSettingParam {
            guild_id: "1".to_string(),
            message: message.to_string(),
        })
        .await;
    }

    assert_eq!(repo.get("1").await.map(|s| s.message), Some("druga".to_string()));
    assert!(repo.get("2").await.is_none());
}

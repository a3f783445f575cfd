use super::*;
use crate::{
    model::channel::ChannelDto,
    server::{
        controller::channel::get_channels, data::channel::ChannelRepository,
        model::channel::CreateChannelParam,
    },
};

/// Tests listing channels before any reconciliation.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn returns_empty_list_initially() {
    let app = test_state();

    let response = get_channels(state(&app)).await.unwrap();
    let (status, channels): (u16, Vec<ChannelDto>) = json_body(response).await;

    assert_eq!(status, 200);
    assert!(channels.is_empty());
}

/// Tests listing mirrored channels.
///
/// Expected: 200 with descriptors in serial order and camelCase keys
#[tokio::test]
async fn returns_mirrored_channels() {
    let app = test_state();
    let repo = ChannelRepository::new(&app.store);
    for (id, name, read_only) in [("200", "il-witamy", false), ("201", "il-regulamin", true)] {
        repo.create(CreateChannelParam {
            discord_channel_id: id.to_string(),
            name: name.to_string(),
            category: "lobby".to_string(),
            read_only,
        })
        .await
        .unwrap();
    }

    let response = get_channels(state(&app)).await.unwrap();
    let (status, body): (u16, serde_json::Value) = json_body(response).await;

    assert_eq!(status, 200);
    assert_eq!(body[0]["discordChannelId"], "200");
    assert_eq!(body[0]["readOnly"], false);
    assert_eq!(body[1]["name"], "il-regulamin");
    assert_eq!(body[1]["id"], 2);
}

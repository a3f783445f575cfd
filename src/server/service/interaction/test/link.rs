use super::*;
use crate::server::service::{
    command::{APKA_COMMAND, GENERATOR_COMMAND, PANEL_COMMAND},
    interaction::{
        link::{LINK_MISSING_REPLY, PANEL_DENIED_REPLY},
        LinkCommand,
    },
    layout::PANEL_ROLE,
};

fn links() -> LinkConfig {
    LinkConfig {
        apka: Some("https://apka.example".to_string()),
        generator: None,
        admin_panel: Some("https://admin.example".to_string()),
        panel: Some("https://panel.example".to_string()),
    }
}

/// Tests a public static link.
///
/// Expected: the URL posted publicly
#[tokio::test]
async fn replies_with_link() {
    let guild = FakeGuild::new(GUILD_ID);

    let (route, responder) = dispatch(
        &guild,
        &MemStore::new(),
        &links(),
        &command(APKA_COMMAND, 1),
    )
    .await;

    assert_eq!(route, Route::StaticLink(LinkCommand::Apka));
    assert_eq!(
        responder.responses(),
        vec![Response::Reply(ReplySpec::public("https://apka.example"))]
    );
}

/// Tests a link that was never configured.
///
/// Expected: ephemeral "not configured" reply
#[tokio::test]
async fn unset_link_is_reported() {
    let guild = FakeGuild::new(GUILD_ID);

    let (_, responder) = dispatch(
        &guild,
        &MemStore::new(),
        &links(),
        &command(GENERATOR_COMMAND, 1),
    )
    .await;

    assert_eq!(
        responder.visible_reply(),
        ReplySpec::ephemeral(LINK_MISSING_REPLY)
    );
}

/// Tests /panel without the panel role.
///
/// Expected: ephemeral permission-denied reply, no link
#[tokio::test]
async fn panel_requires_role() {
    let guild = FakeGuild::new(GUILD_ID).with_role(45, PANEL_ROLE);

    let (_, responder) = dispatch(
        &guild,
        &MemStore::new(),
        &links(),
        &command(PANEL_COMMAND, 1),
    )
    .await;

    assert_eq!(
        responder.responses(),
        vec![Response::Reply(ReplySpec::ephemeral(PANEL_DENIED_REPLY))]
    );
}

/// Tests /panel with the panel role.
///
/// Expected: the panel URL, ephemerally
#[tokio::test]
async fn panel_link_for_role_holder() {
    let guild = FakeGuild::new(GUILD_ID).with_role(45, PANEL_ROLE);
    let mut request = command(PANEL_COMMAND, 1);
    request.invoker.role_ids = vec![45];

    let (_, responder) = dispatch(&guild, &MemStore::new(), &links(), &request).await;

    assert_eq!(
        responder.visible_reply(),
        ReplySpec::ephemeral("https://panel.example")
    );
}

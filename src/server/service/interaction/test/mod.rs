use std::collections::HashMap;

use crate::server::{
    config::LinkConfig,
    data::store::MemStore,
    model::{
        interaction::{InteractionKind, InteractionRequest, Invoker},
        message::ReplySpec,
    },
    service::interaction::{InteractionRouter, Route},
    test::{FakeGuild, FakeResponder, Response},
};

mod link;

const GUILD_ID: u64 = 700;
const USER_ID: u64 = 30;
const USERNAME: &str = "janek";

fn request(kind: InteractionKind, identifier: &str, channel_id: u64) -> InteractionRequest {
    InteractionRequest {
        kind,
        identifier: identifier.to_string(),
        guild_id: Some(GUILD_ID),
        channel_id,
        invoker: Invoker {
            user_id: USER_ID,
            username: USERNAME.to_string(),
            role_ids: Vec::new(),
        },
        options: HashMap::new(),
        fields: HashMap::new(),
    }
}

fn command(name: &str, channel_id: u64) -> InteractionRequest {
    request(InteractionKind::Command, name, channel_id)
}

fn button(custom_id: &str) -> InteractionRequest {
    request(InteractionKind::Button, custom_id, 1)
}

async fn dispatch(
    guild: &FakeGuild,
    store: &MemStore,
    links: &LinkConfig,
    request: &InteractionRequest,
) -> (Route, FakeResponder) {
    let responder = FakeResponder::new();
    let route = InteractionRouter::new(guild, store, links)
        .dispatch(request, &responder)
        .await;

    (route, responder)
}

/// Dispatches against a guild with default links and a fresh store.
async fn dispatch_in(guild: &FakeGuild, request: &InteractionRequest) -> (Route, FakeResponder) {
    dispatch(guild, &MemStore::new(), &LinkConfig::default(), request).await
}

fn reply_text(reply: &ReplySpec) -> &str {
    reply.content.as_deref().unwrap_or_default()
}

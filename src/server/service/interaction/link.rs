//! Static-link commands.

use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::{GuildGateway, InteractionResponder},
    config::LinkConfig,
    error::AppError,
    model::{guild::find_role, interaction::InteractionRequest, message::ReplySpec},
    service::{interaction::LinkCommand, layout::PANEL_ROLE},
};

pub const PANEL_DENIED_REPLY: &str = "❌ Nie masz uprawnień do panelu.";
pub const LINK_MISSING_REPLY: &str = "⚠️ Ten link nie został skonfigurowany.";

fn configured_link(links: &LinkConfig, command: LinkCommand) -> Option<&str> {
    match command {
        LinkCommand::Apka => links.apka.as_deref(),
        LinkCommand::Generator => links.generator.as_deref(),
        LinkCommand::AdminPanel => links.admin_panel.as_deref(),
        LinkCommand::Panel => links.panel.as_deref(),
    }
}

/// Replies with the command's link.
///
/// `/panel` is answered ephemerally and only for members holding the panel role;
/// the other links are posted publicly.
pub async fn send_link<G: GuildGateway, R: InteractionResponder>(
    gateway: &G,
    links: &LinkConfig,
    command: LinkCommand,
    request: &InteractionRequest,
    responder: &R,
) -> Result<(), AppError> {
    if command == LinkCommand::Panel {
        let roles = gateway.roles().await?;
        let allowed = find_role(&roles, PANEL_ROLE)
            .map(|role| request.invoker.role_ids.contains(&role.id))
            .unwrap_or(false);

        if !allowed {
            tracing::info!("Denied /panel to {}", request.invoker.username);
            return responder.reply(ReplySpec::ephemeral(PANEL_DENIED_REPLY)).await;
        }
    }

    let Some(url) = configured_link(links, command) else {
        tracing::warn!("No link configured for {:?}", command);
        return responder.reply(ReplySpec::ephemeral(LINK_MISSING_REPLY)).await;
    };

    let reply = if command == LinkCommand::Panel {
        ReplySpec::ephemeral(url)
    } else {
        ReplySpec::public(url)
    };

    responder.reply(reply).await
}

//! The verify button.

use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::{GuildGateway, InteractionResponder},
    error::AppError,
    model::{guild::find_role, interaction::InteractionRequest, message::ReplySpec},
    service::layout::{UNVERIFIED_ROLE, VERIFIED_ROLE},
};

pub const VERIFIED_REPLY: &str = "✅ Zostałeś zweryfikowany! Witamy na serwerze.";

/// Swaps the unverified role for the verified one on the invoking member.
///
/// Silently does nothing when either role does not exist.
pub async fn verify_member<G: GuildGateway, R: InteractionResponder>(
    gateway: &G,
    request: &InteractionRequest,
    responder: &R,
) -> Result<(), AppError> {
    let roles = gateway.roles().await?;
    let (Some(unverified), Some(verified)) = (
        find_role(&roles, UNVERIFIED_ROLE),
        find_role(&roles, VERIFIED_ROLE),
    ) else {
        tracing::warn!("Verification roles missing, ignoring verify click");
        return Ok(());
    };

    let user_id = request.invoker.user_id;
    gateway.remove_member_role(user_id, unverified.id).await?;
    gateway.add_member_role(user_id, verified.id).await?;

    responder.reply(ReplySpec::ephemeral(VERIFIED_REPLY)).await?;

    tracing::info!("Verified member {}", request.invoker.username);

    Ok(())
}

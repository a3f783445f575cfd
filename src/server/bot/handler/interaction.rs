//! Interaction event handler.
//!
//! Flattens Serenity's command, component and modal interactions into an
//! [`InteractionRequest`] and hands it to the interaction router together with a
//! responder bound to the original interaction.

use std::collections::HashMap;
use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{
    ActionRowComponent, CommandDataOptionValue, CommandInteraction, ComponentInteraction,
    ComponentInteractionDataKind, Context, GuildId, Interaction, Member, ModalInteraction, User,
};

use crate::server::{
    bot::{
        handler::managed_guild,
        responder::{InteractionRef, SerenityResponder},
    },
    model::interaction::{InteractionKind, InteractionRequest, Invoker},
    service::interaction::InteractionRouter,
    state::AppState,
};

fn invoker(user: &User, member: Option<&Member>) -> Invoker {
    Invoker {
        user_id: user.id.get(),
        username: user.name.clone(),
        role_ids: member
            .map(|member| member.roles.iter().map(|role| role.get()).collect())
            .unwrap_or_default(),
    }
}

fn command_request(command: &CommandInteraction) -> InteractionRequest {
    let options = command
        .data
        .options
        .iter()
        .filter_map(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some((option.name.clone(), value.clone())),
            _ => None,
        })
        .collect();

    InteractionRequest {
        kind: InteractionKind::Command,
        identifier: command.data.name.clone(),
        guild_id: command.guild_id.map(|id| id.get()),
        channel_id: command.channel_id.get(),
        invoker: invoker(&command.user, command.member.as_deref()),
        options,
        fields: HashMap::new(),
    }
}

fn button_request(component: &ComponentInteraction) -> Option<InteractionRequest> {
    if !matches!(component.data.kind, ComponentInteractionDataKind::Button) {
        return None;
    }

    Some(InteractionRequest {
        kind: InteractionKind::Button,
        identifier: component.data.custom_id.clone(),
        guild_id: component.guild_id.map(|id| id.get()),
        channel_id: component.channel_id.get(),
        invoker: invoker(&component.user, component.member.as_ref()),
        options: HashMap::new(),
        fields: HashMap::new(),
    })
}

fn modal_request(modal: &ModalInteraction) -> InteractionRequest {
    let fields = modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.clone(),
                input.value.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect();

    InteractionRequest {
        kind: InteractionKind::Modal,
        identifier: modal.data.custom_id.clone(),
        guild_id: modal.guild_id.map(|id| id.get()),
        channel_id: modal.channel_id.get(),
        invoker: invoker(&modal.user, modal.member.as_ref()),
        options: HashMap::new(),
        fields,
    }
}

/// Handles the interaction_create event for commands, buttons and modals
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let (request, target) = match &interaction {
        Interaction::Command(command) => (command_request(command), InteractionRef::Command(command)),
        Interaction::Component(component) => match button_request(component) {
            Some(request) => (request, InteractionRef::Component(component)),
            None => return,
        },
        Interaction::Modal(modal) => (modal_request(modal), InteractionRef::Modal(modal)),
        _ => return,
    };

    let Some(guild_id) = request.guild_id else {
        tracing::debug!("Ignoring interaction '{}' outside of a guild", request.identifier);
        return;
    };
    let Some(gateway) = managed_guild(state, &ctx, GuildId::new(guild_id)).await else {
        tracing::debug!("Ignoring interaction '{}' from unmanaged guild {}", request.identifier, guild_id);
        return;
    };

    let responder = SerenityResponder::new(Arc::clone(&ctx.http), target);
    let route = InteractionRouter::new(&gateway, &state.store, &state.links)
        .dispatch(&request, &responder)
        .await;

    tracing::debug!("Interaction '{}' handled as {:?}", request.identifier, route);
}

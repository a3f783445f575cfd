//! Interaction routing.
//!
//! Every inbound slash command, button click and modal submission is classified
//! into a [`Route`] by its kind and identifier and handed to one handler. Handler
//! failures never propagate: they are logged and the invoking user gets a generic
//! ephemeral error, edited into the deferred response when there is one.

pub mod link;
pub mod ticket;
pub mod verify;

use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::{GuildGateway, InteractionResponder},
    config::LinkConfig,
    data::store::MemStore,
    error::AppError,
    model::interaction::{InteractionKind, InteractionRequest},
    service::command::{
        ADMIN_PANEL_COMMAND, APKA_COMMAND, DONE_COMMAND, GENERATOR_COMMAND, PANEL_COMMAND,
        SET_TICKET_MESSAGE_COMMAND, TICKET_COMMAND,
    },
};

pub const VERIFY_BUTTON: &str = "verify_button";
pub const OPEN_TICKET_BUTTON: &str = "open_ticket_button";
pub const TICKET_MODAL: &str = "ticket_modal";
pub const TICKET_SUBJECT_INPUT: &str = "ticket_subject";
pub const TICKET_DESCRIPTION_INPUT: &str = "ticket_description";

/// Shown to the user whenever a handler fails unexpectedly.
pub const GENERIC_FAILURE: &str = "❌ Wystąpił błąd. Spróbuj ponownie później.";

/// The static-link commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCommand {
    Apka,
    Generator,
    AdminPanel,
    /// Restricted to holders of the panel role.
    Panel,
}

/// Handler selected for an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Verify,
    OpenTicket,
    SubmitTicket,
    SetTicketMessage,
    MarkTicketDone,
    StaticLink(LinkCommand),
    Unknown,
}

impl Route {
    /// Maps an interaction kind and identifier to its handler.
    pub fn classify(kind: InteractionKind, identifier: &str) -> Self {
        match (kind, identifier) {
            (InteractionKind::Button, VERIFY_BUTTON) => Route::Verify,
            (InteractionKind::Button, OPEN_TICKET_BUTTON) => Route::OpenTicket,
            (InteractionKind::Modal, TICKET_MODAL) => Route::SubmitTicket,
            (InteractionKind::Command, TICKET_COMMAND) => Route::OpenTicket,
            (InteractionKind::Command, SET_TICKET_MESSAGE_COMMAND) => Route::SetTicketMessage,
            (InteractionKind::Command, DONE_COMMAND) => Route::MarkTicketDone,
            (InteractionKind::Command, APKA_COMMAND) => Route::StaticLink(LinkCommand::Apka),
            (InteractionKind::Command, GENERATOR_COMMAND) => {
                Route::StaticLink(LinkCommand::Generator)
            }
            (InteractionKind::Command, ADMIN_PANEL_COMMAND) => {
                Route::StaticLink(LinkCommand::AdminPanel)
            }
            (InteractionKind::Command, PANEL_COMMAND) => Route::StaticLink(LinkCommand::Panel),
            _ => Route::Unknown,
        }
    }
}

pub struct InteractionRouter<'a, G: GuildGateway> {
    gateway: &'a G,
    store: &'a MemStore,
    links: &'a LinkConfig,
}

impl<'a, G: GuildGateway> InteractionRouter<'a, G> {
    pub fn new(gateway: &'a G, store: &'a MemStore, links: &'a LinkConfig) -> Self {
        Self {
            gateway,
            store,
            links,
        }
    }

    /// Handles one interaction and returns the route it took.
    ///
    /// Unknown identifiers are ignored. A failing handler is logged and answered
    /// with [`GENERIC_FAILURE`].
    pub async fn dispatch<R: InteractionResponder>(
        &self,
        request: &InteractionRequest,
        responder: &R,
    ) -> Route {
        let route = Route::classify(request.kind, &request.identifier);

        let result = match route {
            Route::Verify => verify::verify_member(self.gateway, request, responder).await,
            Route::OpenTicket => ticket::open_ticket(self.store, request, responder).await,
            Route::SubmitTicket => {
                ticket::submit_ticket(self.gateway, request, responder).await
            }
            Route::SetTicketMessage => {
                ticket::set_ticket_message(self.store, request, responder).await
            }
            Route::MarkTicketDone => {
                ticket::mark_ticket_done(self.gateway, request, responder).await
            }
            Route::StaticLink(command) => {
                link::send_link(self.gateway, self.links, command, request, responder).await
            }
            Route::Unknown => {
                tracing::debug!(
                    "Ignoring unhandled {:?} interaction '{}'",
                    request.kind,
                    request.identifier
                );
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::error!(
                "Failed to handle interaction '{}' from {}: {}",
                request.identifier,
                request.invoker.username,
                e
            );
            if let Err(e) = responder.report_failure(GENERIC_FAILURE).await {
                tracing::error!("Failed to report interaction failure: {}", e);
            }
        }

        route
    }
}

/// The guild an interaction came from, as a string store key.
fn guild_key(request: &InteractionRequest) -> Result<String, AppError> {
    request
        .guild_id
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::BadRequest("Interaction outside of a guild".to_string()))
}

#[cfg(test)]
mod test;

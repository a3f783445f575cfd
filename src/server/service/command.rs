//! The guild's slash command set.
//!
//! Registered with overwrite semantics on every ready: the full list replaces
//! whatever was registered before.

use serenity::all::Permissions;

use crate::server::{model::command::CommandSpec, service::notice::MAX_PLACEHOLDER_LEN};

pub const TICKET_COMMAND: &str = "ticket";
pub const SET_TICKET_MESSAGE_COMMAND: &str = "setticketmessage";
pub const SET_TICKET_MESSAGE_OPTION: &str = "message";
pub const DONE_COMMAND: &str = "gotowe";
pub const APKA_COMMAND: &str = "apka";
pub const GENERATOR_COMMAND: &str = "generator";
pub const ADMIN_PANEL_COMMAND: &str = "adminpanel";
pub const PANEL_COMMAND: &str = "panel";

pub fn command_set() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(TICKET_COMMAND, "Otwórz nowy ticket"),
        CommandSpec::new(
            SET_TICKET_MESSAGE_COMMAND,
            "Ustaw tekst podpowiedzi w formularzu ticketu",
        )
        .string_option(SET_TICKET_MESSAGE_OPTION, "Nowa treść podpowiedzi", true)
        .max_length(MAX_PLACEHOLDER_LEN as u16)
        .privileged(Permissions::ADMINISTRATOR),
        CommandSpec::new(APKA_COMMAND, "Link do aplikacji"),
        CommandSpec::new(GENERATOR_COMMAND, "Link do generatora"),
        CommandSpec::new(ADMIN_PANEL_COMMAND, "Link do panelu administratora"),
        CommandSpec::new(PANEL_COMMAND, "Link do panelu (wymaga roli Panel)"),
        CommandSpec::new(DONE_COMMAND, "Oznacz ticket jako gotowy")
            .privileged(Permissions::MANAGE_CHANNELS),
    ]
}

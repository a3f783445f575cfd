//! Builders for the fixed messages the bot posts.
//!
//! Keeps every user-facing text of the static channel posts, the welcome message,
//! the ticket modal and the ticket thread embed in one place so that reconciliation
//! and event handlers share identical output.

use crate::server::{
    model::{
        message::{
            ButtonSpec, ButtonTone, EmbedSpec, InputStyle, MessageSpec, ModalInput, ModalSpec,
        },
        ticket::TicketRequest,
    },
    service::interaction::{
        OPEN_TICKET_BUTTON, TICKET_DESCRIPTION_INPUT, TICKET_MODAL, TICKET_SUBJECT_INPUT,
        VERIFY_BUTTON,
    },
};

const COLOR_BRAND: u32 = 0x5865f2;
const COLOR_SUCCESS: u32 = 0x2ecc71;
const COLOR_WARNING: u32 = 0xf39c12;
const COLOR_TICKET: u32 = 0x3498db;

/// Discord's maximum channel and thread name length.
const MAX_THREAD_NAME_LEN: usize = 100;
/// Discord's maximum text input placeholder length.
pub const MAX_PLACEHOLDER_LEN: usize = 100;

fn verify_button() -> ButtonSpec {
    ButtonSpec {
        custom_id: VERIFY_BUTTON.to_string(),
        label: "Zweryfikuj się".to_string(),
        emoji: Some('✅'),
        tone: ButtonTone::Success,
    }
}

fn open_ticket_button() -> ButtonSpec {
    ButtonSpec {
        custom_id: OPEN_TICKET_BUTTON.to_string(),
        label: "Otwórz ticket".to_string(),
        emoji: Some('🎫'),
        tone: ButtonTone::Primary,
    }
}

/// Server rules posted in the rules channel.
pub fn rules_message() -> MessageSpec {
    MessageSpec::embed(
        EmbedSpec::new(
            "📜 Regulamin serwera",
            "1. Szanuj innych użytkowników.\n\
             2. Zakaz spamu, reklam i podszywania się pod administrację.\n\
             3. Zakupy realizujemy wyłącznie przez tickety.\n\
             4. Administracja ma zawsze ostatnie słowo.\n\
             5. Korzystając z serwera akceptujesz regulamin.",
            COLOR_BRAND,
        )
        .footer("Nieznajomość regulaminu nie zwalnia z jego przestrzegania"),
    )
}

/// Verification prompt posted in the verification channel.
pub fn verification_message() -> MessageSpec {
    MessageSpec::embed(EmbedSpec::new(
        "✅ Weryfikacja",
        "Kliknij przycisk poniżej, aby się zweryfikować i uzyskać dostęp do serwera.",
        COLOR_SUCCESS,
    ))
    .with_button(verify_button())
}

/// Legit-check prompt posted in the legit-check channel.
pub fn legit_check_message() -> MessageSpec {
    MessageSpec::embed(
        EmbedSpec::new(
            "🔍 Czy legit?",
            "Masz wątpliwości? Sprawdź opinie innych klientów w #il-opinie oraz potwierdzenia \
             transakcji w #il-legit. Po zakupie zostaw swoją opinię!",
            COLOR_WARNING,
        )
        .field("Zakupy", "Wyłącznie przez ticket w #il-tickety", false),
    )
}

/// Ticket intake prompt posted in the ticket channel.
pub fn ticket_intake_message() -> MessageSpec {
    MessageSpec::embed(EmbedSpec::new(
        "🎫 Tickety",
        "Potrzebujesz pomocy lub chcesz złożyć zamówienie? Kliknij przycisk poniżej \
         albo użyj komendy /ticket.",
        COLOR_TICKET,
    ))
    .with_button(open_ticket_button())
}

/// Welcome message for a member who just joined.
pub fn welcome_message(display_name: &str, mention: &str, member_count: u64) -> MessageSpec {
    MessageSpec::embed(
        EmbedSpec::new(
            format!("👋 Witaj {}!", display_name),
            format!(
                "Witaj {} na naszym serwerze! Jesteś naszym **{}.** członkiem.\n\
                 Zweryfikuj się, aby zobaczyć resztę kanałów.",
                mention, member_count
            ),
            COLOR_BRAND,
        )
        .footer(format!("Członków: {}", member_count)),
    )
    .with_button(verify_button())
}

/// Modal opened by the ticket button and `/ticket`.
pub fn ticket_modal(description_placeholder: &str) -> ModalSpec {
    ModalSpec {
        custom_id: TICKET_MODAL.to_string(),
        title: "Nowy ticket".to_string(),
        inputs: vec![
            ModalInput {
                custom_id: TICKET_SUBJECT_INPUT.to_string(),
                label: "Temat".to_string(),
                style: InputStyle::Short,
                required: true,
                placeholder: Some("Krótko, czego dotyczy ticket".to_string()),
                max_length: Some(MAX_THREAD_NAME_LEN as u16),
            },
            ModalInput {
                custom_id: TICKET_DESCRIPTION_INPUT.to_string(),
                label: "Opis".to_string(),
                style: InputStyle::Paragraph,
                required: true,
                placeholder: Some(
                    description_placeholder
                        .chars()
                        .take(MAX_PLACEHOLDER_LEN)
                        .collect(),
                ),
                max_length: Some(4000),
            },
        ],
    }
}

/// Thread name for a ticket: `"<subject> - <username>"`, cut to Discord's limit.
pub fn ticket_thread_name(subject: &str, username: &str) -> String {
    format!("{} - {}", subject, username)
        .chars()
        .take(MAX_THREAD_NAME_LEN)
        .collect()
}

/// Embed posted as the first message of a ticket thread.
pub fn ticket_message(request: &TicketRequest) -> MessageSpec {
    MessageSpec::embed(
        EmbedSpec::new(&request.subject, &request.description, COLOR_TICKET)
            .author(&request.author_name)
            .field("Zgłaszający", format!("<@{}>", request.author_id), true)
            .timestamp(request.submitted_at),
    )
}

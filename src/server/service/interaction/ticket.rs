//! Ticket flows: opening the form, turning a submission into a thread, the
//! per-guild placeholder setting and closing a ticket with `/gotowe`.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::{GuildGateway, InteractionResponder},
    data::{store::MemStore, ticket_setting::TicketSettingRepository},
    error::AppError,
    model::{
        guild::ChannelKind,
        interaction::InteractionRequest,
        message::ReplySpec,
        ticket::{TicketRequest, UpsertTicketSettingParam, DEFAULT_TICKET_MESSAGE},
    },
    service::{
        command::SET_TICKET_MESSAGE_OPTION,
        interaction::{guild_key, TICKET_DESCRIPTION_INPUT, TICKET_SUBJECT_INPUT},
        layout::{is_managed_channel, COUNTER_CATEGORY, TICKET_CHANNEL},
        notice::{ticket_message, ticket_modal, ticket_thread_name, MAX_PLACEHOLDER_LEN},
    },
};

pub const THREAD_FAILED_REPLY: &str = "❌ Nie udało się utworzyć ticketu. Spróbuj ponownie później.";
pub const MISSING_FIELDS_REPLY: &str = "❌ Temat i opis ticketu są wymagane.";
pub const MISSING_MESSAGE_REPLY: &str = "❌ Podaj treść wiadomości.";
pub const NOT_A_TICKET_REPLY: &str = "❌ Tej komendy można użyć tylko w kanale ticketu.";
pub const DONE_PREFIX: &str = "gotowy-";

/// Link to a channel or thread in the Discord client.
pub fn channel_link(guild_id: u64, channel_id: u64) -> String {
    format!("https://discord.com/channels/{}/{}", guild_id, channel_id)
}

/// Name a ticket channel gets once it is done: `gotowy-` followed by the
/// trailing digits of the current name, or the whole name when it has none.
pub fn done_channel_name(current: &str) -> String {
    let prefix_len = current.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let suffix = &current[prefix_len..];

    if suffix.is_empty() {
        format!("{}{}", DONE_PREFIX, current)
    } else {
        format!("{}{}", DONE_PREFIX, suffix)
    }
}

/// Opens the ticket modal with the guild's configured placeholder.
pub async fn open_ticket<R: InteractionResponder>(
    store: &MemStore,
    request: &InteractionRequest,
    responder: &R,
) -> Result<(), AppError> {
    let setting = match request.guild_id {
        Some(guild_id) => {
            TicketSettingRepository::new(store)
                .get(&guild_id.to_string())
                .await
        }
        None => None,
    };

    let placeholder = setting
        .as_ref()
        .map(|setting| setting.message.as_str())
        .unwrap_or(DEFAULT_TICKET_MESSAGE);

    responder.open_modal(ticket_modal(placeholder)).await
}

/// Creates a private thread for a submitted ticket and links the submitter to it.
///
/// The response is deferred first since thread creation takes several calls. A
/// failed thread creation is answered with its own error message; later failures
/// fall through to the generic one.
pub async fn submit_ticket<G: GuildGateway, R: InteractionResponder>(
    gateway: &G,
    request: &InteractionRequest,
    responder: &R,
) -> Result<(), AppError> {
    responder.defer_ephemeral().await?;

    let subject = request.field(TICKET_SUBJECT_INPUT).map(str::trim).unwrap_or_default();
    let description = request
        .field(TICKET_DESCRIPTION_INPUT)
        .map(str::trim)
        .unwrap_or_default();

    if subject.is_empty() || description.is_empty() {
        return responder.edit(ReplySpec::ephemeral(MISSING_FIELDS_REPLY)).await;
    }

    let channels = gateway.channels().await?;
    let intake = channels
        .iter()
        .find(|channel| channel.kind == ChannelKind::Text && channel.name == TICKET_CHANNEL)
        .ok_or_else(|| AppError::NotFound(format!("Channel {} not found", TICKET_CHANNEL)))?;

    let thread_name = ticket_thread_name(subject, &request.invoker.username);
    let thread = match gateway.create_private_thread(intake.id, &thread_name).await {
        Ok(thread) => thread,
        Err(e) => {
            tracing::error!("Failed to create ticket thread '{}': {}", thread_name, e);
            return responder.edit(ReplySpec::ephemeral(THREAD_FAILED_REPLY)).await;
        }
    };

    gateway
        .add_thread_member(thread.id, request.invoker.user_id)
        .await?;

    let ticket = TicketRequest {
        subject: subject.to_string(),
        description: description.to_string(),
        author_id: request.invoker.user_id,
        author_name: request.invoker.username.clone(),
        submitted_at: Utc::now(),
    };
    gateway.send_message(thread.id, ticket_message(&ticket)).await?;

    tracing::info!(
        "Opened ticket '{}' for {}",
        thread.name,
        request.invoker.username
    );

    let link = channel_link(gateway.guild_id(), thread.id);
    responder
        .edit(ReplySpec::ephemeral(format!(
            "✅ Ticket został utworzony: {}",
            link
        )))
        .await
}

/// Stores the guild's ticket placeholder and echoes it back.
pub async fn set_ticket_message<R: InteractionResponder>(
    store: &MemStore,
    request: &InteractionRequest,
    responder: &R,
) -> Result<(), AppError> {
    let message = request
        .option(SET_TICKET_MESSAGE_OPTION)
        .map(str::trim)
        .filter(|message| !message.is_empty());

    let Some(message) = message else {
        return responder.reply(ReplySpec::ephemeral(MISSING_MESSAGE_REPLY)).await;
    };
    // Longer text would be cut off in the form placeholder
    if message.chars().count() > MAX_PLACEHOLDER_LEN {
        return responder
            .reply(ReplySpec::ephemeral(format!(
                "❌ Wiadomość może mieć najwyżej {} znaków.",
                MAX_PLACEHOLDER_LEN
            )))
            .await;
    }

    let setting = TicketSettingRepository::new(store)
        .upsert(UpsertTicketSettingParam {
            guild_id: guild_key(request)?,
            message: message.to_string(),
        })
        .await;

    tracing::info!(
        "Ticket message for guild {} set by {} at {}",
        setting.guild_id,
        request.invoker.username,
        setting.updated_at
    );

    responder
        .reply(ReplySpec::ephemeral(format!(
            "✅ Nowa wiadomość ticketu: {}",
            setting.message
        )))
        .await
}

/// Renames the current ticket channel to mark it done.
///
/// Refused in categories, in the channels the bot manages itself and in anything
/// under the counter category.
pub async fn mark_ticket_done<G: GuildGateway, R: InteractionResponder>(
    gateway: &G,
    request: &InteractionRequest,
    responder: &R,
) -> Result<(), AppError> {
    let channel = gateway.channel(request.channel_id).await?;

    let under_counter = match channel.parent_id {
        Some(parent_id) => gateway.channel(parent_id).await?.name == COUNTER_CATEGORY,
        None => false,
    };
    if channel.is_category() || under_counter || is_managed_channel(&channel.name) {
        return responder.reply(ReplySpec::ephemeral(NOT_A_TICKET_REPLY)).await;
    }

    let name = done_channel_name(&channel.name);
    gateway.rename_channel(channel.id, &name).await?;

    tracing::info!(
        "{} marked ticket {} as done",
        request.invoker.username,
        channel.name
    );

    responder
        .reply(ReplySpec::public(format!("✅ Ticket oznaczony jako gotowy: {}", name)))
        .await
}

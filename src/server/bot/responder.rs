//! Serenity implementation of [`InteractionResponder`].

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serenity::{
    all::{
        CommandInteraction, ComponentInteraction, CreateActionRow, CreateInputText,
        CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal,
        EditInteractionResponse, InputTextStyle, ModalInteraction,
    },
    async_trait,
    http::Http,
};

use crate::server::{
    bot::{discord::build_embed, gateway::InteractionResponder},
    error::AppError,
    model::message::{InputStyle, ModalInput, ModalSpec, ReplySpec},
};

/// The interaction being answered.
pub enum InteractionRef<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
    Modal(&'a ModalInteraction),
}

pub struct SerenityResponder<'a> {
    http: Arc<Http>,
    interaction: InteractionRef<'a>,
    deferred: AtomicBool,
}

impl<'a> SerenityResponder<'a> {
    pub fn new(http: Arc<Http>, interaction: InteractionRef<'a>) -> Self {
        Self {
            http,
            interaction,
            deferred: AtomicBool::new(false),
        }
    }

    async fn respond(&self, response: CreateInteractionResponse) -> Result<(), AppError> {
        match &self.interaction {
            InteractionRef::Command(i) => i.create_response(&self.http, response).await?,
            InteractionRef::Component(i) => i.create_response(&self.http, response).await?,
            InteractionRef::Modal(i) => i.create_response(&self.http, response).await?,
        }

        Ok(())
    }
}

fn build_input(input: &ModalInput) -> CreateActionRow {
    let style = match input.style {
        InputStyle::Short => InputTextStyle::Short,
        InputStyle::Paragraph => InputTextStyle::Paragraph,
    };

    let mut text = CreateInputText::new(style, &input.label, &input.custom_id)
        .required(input.required);
    if let Some(placeholder) = &input.placeholder {
        text = text.placeholder(placeholder);
    }
    if let Some(max_length) = input.max_length {
        text = text.max_length(max_length);
    }

    CreateActionRow::InputText(text)
}

#[async_trait]
impl InteractionResponder for SerenityResponder<'_> {
    async fn reply(&self, reply: ReplySpec) -> Result<(), AppError> {
        let mut message = CreateInteractionResponseMessage::new().ephemeral(reply.ephemeral);
        if let Some(content) = reply.content {
            message = message.content(content);
        }
        if let Some(embed) = &reply.embed {
            message = message.embed(build_embed(embed));
        }

        self.respond(CreateInteractionResponse::Message(message)).await
    }

    async fn defer_ephemeral(&self) -> Result<(), AppError> {
        self.respond(CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(true),
        ))
        .await?;
        self.deferred.store(true, Ordering::SeqCst);

        Ok(())
    }

    /// Ephemerality was fixed by the deferral, so `reply.ephemeral` is ignored.
    async fn edit(&self, reply: ReplySpec) -> Result<(), AppError> {
        let mut edit = EditInteractionResponse::new();
        if let Some(content) = reply.content {
            edit = edit.content(content);
        }
        if let Some(embed) = &reply.embed {
            edit = edit.embed(build_embed(embed));
        }

        match &self.interaction {
            InteractionRef::Command(i) => i.edit_response(&self.http, edit).await?,
            InteractionRef::Component(i) => i.edit_response(&self.http, edit).await?,
            InteractionRef::Modal(i) => i.edit_response(&self.http, edit).await?,
        };

        Ok(())
    }

    async fn open_modal(&self, modal: ModalSpec) -> Result<(), AppError> {
        let rows = modal.inputs.iter().map(build_input).collect();
        let modal = CreateModal::new(&modal.custom_id, &modal.title).components(rows);

        self.respond(CreateInteractionResponse::Modal(modal)).await
    }

    fn is_deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }
}

//! Outgoing Discord payloads described independently of Serenity's builders.
//!
//! Services assemble these; the Serenity gateway and responder translate them into
//! `CreateMessage`, `CreateInteractionResponse` and friends.

use chrono::{DateTime, Utc};

/// An embed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmbedSpec {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub author: Option<String>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedSpec {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            ..Default::default()
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Primary,
    Success,
    Secondary,
}

/// An interactive button routed back to the bot by `custom_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub custom_id: String,
    pub label: String,
    pub emoji: Option<char>,
    pub tone: ButtonTone,
}

/// A channel message: optional text, optional embed, one row of buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageSpec {
    pub content: Option<String>,
    pub embed: Option<EmbedSpec>,
    pub buttons: Vec<ButtonSpec>,
}

impl MessageSpec {
    pub fn embed(embed: EmbedSpec) -> Self {
        Self {
            embed: Some(embed),
            ..Default::default()
        }
    }

    pub fn with_button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }
}

/// A response to an interaction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplySpec {
    pub content: Option<String>,
    pub embed: Option<EmbedSpec>,
    /// Visible only to the invoking user.
    pub ephemeral: bool,
}

impl ReplySpec {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            ephemeral: true,
        }
    }

    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            ephemeral: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStyle {
    Short,
    Paragraph,
}

/// A text input inside a modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalInput {
    pub custom_id: String,
    pub label: String,
    pub style: InputStyle,
    pub required: bool,
    pub placeholder: Option<String>,
    pub max_length: Option<u16>,
}

/// A modal dialog opened in response to a button or command.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSpec {
    pub custom_id: String,
    pub title: String,
    pub inputs: Vec<ModalInput>,
}

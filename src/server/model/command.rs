//! Slash command definitions registered on the guild.

use serenity::all::Permissions;

/// A required or optional string argument of a slash command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOptionSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub max_length: Option<u16>,
}

/// A guild-scoped slash command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOptionSpec>,
    /// Members need these permissions to see and run the command.
    pub required_permissions: Option<Permissions>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            required_permissions: None,
        }
    }

    pub fn string_option(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.options.push(CommandOptionSpec {
            name: name.into(),
            description: description.into(),
            required,
            max_length: None,
        });
        self
    }

    /// Caps the length of the most recently added option.
    pub fn max_length(mut self, max_length: u16) -> Self {
        if let Some(option) = self.options.last_mut() {
            option.max_length = Some(max_length);
        }
        self
    }

    pub fn privileged(mut self, permissions: Permissions) -> Self {
        self.required_permissions = Some(permissions);
        self
    }
}

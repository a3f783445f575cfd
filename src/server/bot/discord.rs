//! Serenity implementation of [`GuildGateway`].
//!
//! Converts the domain payload types into Serenity builders and Serenity models
//! back into the guild snapshots services work with.

use std::sync::Arc;

use serenity::{
    all::{
        ButtonStyle, ChannelId, ChannelType, CommandOptionType, CreateActionRow, CreateButton,
        CreateChannel, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedAuthor,
        CreateEmbedFooter, CreateMessage, CreateThread, EditChannel, EditRole, GetMessages,
        GuildId, PermissionOverwrite, PermissionOverwriteType, RoleId, Timestamp, UserId,
    },
    async_trait,
    http::Http,
};

use crate::server::{
    bot::gateway::GuildGateway,
    error::AppError,
    model::{
        command::CommandSpec,
        guild::{ChannelInfo, MemberInfo, PermissionRule, RoleInfo},
        message::{ButtonSpec, ButtonTone, EmbedSpec, MessageSpec},
    },
};

/// Page size of the member list endpoint.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// The managed guild, reached through the bot's HTTP client.
pub struct SerenityGuild {
    http: Arc<Http>,
    guild_id: GuildId,
    bot_user_id: UserId,
}

impl SerenityGuild {
    pub fn new(http: Arc<Http>, guild_id: u64, bot_user_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
            bot_user_id: UserId::new(bot_user_id),
        }
    }
}

fn to_overwrite(rule: &PermissionRule) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: rule.allow,
        deny: rule.deny,
        kind: PermissionOverwriteType::Role(RoleId::new(rule.role_id)),
    }
}

pub(super) fn build_embed(spec: &EmbedSpec) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&spec.title)
        .description(&spec.description)
        .color(spec.color);

    for field in &spec.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(author) = &spec.author {
        embed = embed.author(CreateEmbedAuthor::new(author));
    }
    if let Some(footer) = &spec.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    // An out-of-range timestamp only loses the embed's time line
    if let Some(timestamp) = spec
        .timestamp
        .and_then(|time| Timestamp::from_unix_timestamp(time.timestamp()).ok())
    {
        embed = embed.timestamp(timestamp);
    }

    embed
}

fn build_button(spec: &ButtonSpec) -> CreateButton {
    let style = match spec.tone {
        ButtonTone::Primary => ButtonStyle::Primary,
        ButtonTone::Success => ButtonStyle::Success,
        ButtonTone::Secondary => ButtonStyle::Secondary,
    };

    let mut button = CreateButton::new(&spec.custom_id)
        .label(&spec.label)
        .style(style);
    if let Some(emoji) = spec.emoji {
        button = button.emoji(emoji);
    }

    button
}

fn build_message(spec: &MessageSpec) -> CreateMessage {
    let mut message = CreateMessage::new();

    if let Some(content) = &spec.content {
        message = message.content(content);
    }
    if let Some(embed) = &spec.embed {
        message = message.embed(build_embed(embed));
    }
    if !spec.buttons.is_empty() {
        let buttons = spec.buttons.iter().map(build_button).collect();
        message = message.components(vec![CreateActionRow::Buttons(buttons)]);
    }

    message
}

fn build_command(spec: &CommandSpec) -> CreateCommand {
    let mut command = CreateCommand::new(&spec.name).description(&spec.description);

    for option in &spec.options {
        let mut builder =
            CreateCommandOption::new(CommandOptionType::String, &option.name, &option.description)
                .required(option.required);
        if let Some(max_length) = option.max_length {
            builder = builder.max_length(max_length);
        }
        command = command.add_option(builder);
    }
    if let Some(permissions) = spec.required_permissions {
        command = command.default_member_permissions(permissions);
    }

    command
}

#[async_trait]
impl GuildGateway for SerenityGuild {
    fn guild_id(&self) -> u64 {
        self.guild_id.get()
    }

    fn bot_user_id(&self) -> u64 {
        self.bot_user_id.get()
    }

    async fn channels(&self) -> Result<Vec<ChannelInfo>, AppError> {
        let channels = self.guild_id.channels(&self.http).await?;

        let mut channels: Vec<ChannelInfo> = channels
            .values()
            .map(ChannelInfo::from_guild_channel)
            .collect();
        channels.sort_by_key(|channel| channel.id);

        Ok(channels)
    }

    async fn channel(&self, channel_id: u64) -> Result<ChannelInfo, AppError> {
        let channel = ChannelId::new(channel_id).to_channel(&self.http).await?;

        channel
            .guild()
            .map(|channel| ChannelInfo::from_guild_channel(&channel))
            .ok_or_else(|| AppError::NotFound(format!("Channel {} is not a guild channel", channel_id)))
    }

    async fn create_category(&self, name: &str) -> Result<ChannelInfo, AppError> {
        let category = self
            .guild_id
            .create_channel(&self.http, CreateChannel::new(name).kind(ChannelType::Category))
            .await?;

        Ok(ChannelInfo::from_guild_channel(&category))
    }

    async fn create_text_channel(
        &self,
        name: &str,
        parent_id: u64,
        rules: &[PermissionRule],
    ) -> Result<ChannelInfo, AppError> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .category(ChannelId::new(parent_id))
            .permissions(rules.iter().map(to_overwrite));

        let channel = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(ChannelInfo::from_guild_channel(&channel))
    }

    async fn set_permission(&self, channel_id: u64, rule: PermissionRule) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .create_permission(&self.http, to_overwrite(&rule))
            .await?;

        Ok(())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id).delete(&self.http).await?;

        Ok(())
    }

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit(&self.http, EditChannel::new().name(name))
            .await?;

        Ok(())
    }

    async fn roles(&self) -> Result<Vec<RoleInfo>, AppError> {
        let roles = self.guild_id.roles(&self.http).await?;

        Ok(roles.values().map(RoleInfo::from_role).collect())
    }

    async fn create_role(&self, name: &str) -> Result<RoleInfo, AppError> {
        let role = self
            .guild_id
            .create_role(&self.http, EditRole::new().name(name))
            .await?;

        Ok(RoleInfo::from_role(&role))
    }

    async fn members(&self) -> Result<Vec<MemberInfo>, AppError> {
        let mut members = Vec::new();
        let mut after: Option<UserId> = None;

        loop {
            let page = self
                .guild_id
                .members(&self.http, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let full_page = page.len() as u64 == MEMBER_PAGE_SIZE;

            after = page.last().map(|member| member.user.id);
            members.extend(page.iter().map(MemberInfo::from_member));

            if !full_page {
                break;
            }
        }

        Ok(members)
    }

    async fn member_count(&self) -> Result<u64, AppError> {
        let guild = self
            .guild_id
            .to_partial_guild_with_counts(&self.http)
            .await?;

        guild.approximate_member_count.ok_or_else(|| {
            AppError::InternalError(format!("Guild {} returned without member counts", self.guild_id))
        })
    }

    async fn add_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .add_member_role(self.guild_id, UserId::new(user_id), RoleId::new(role_id), None)
            .await?;

        Ok(())
    }

    async fn remove_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError> {
        self.http
            .remove_member_role(self.guild_id, UserId::new(user_id), RoleId::new(role_id), None)
            .await?;

        Ok(())
    }

    async fn recent_message_authors(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<u64>, AppError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages.iter().map(|message| message.author.id.get()).collect())
    }

    async fn send_message(&self, channel_id: u64, message: MessageSpec) -> Result<u64, AppError> {
        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, build_message(&message))
            .await?;

        Ok(sent.id.get())
    }

    async fn create_private_thread(
        &self,
        parent_id: u64,
        name: &str,
    ) -> Result<ChannelInfo, AppError> {
        let thread = ChannelId::new(parent_id)
            .create_thread(
                &self.http,
                CreateThread::new(name).kind(ChannelType::PrivateThread),
            )
            .await?;

        Ok(ChannelInfo::from_guild_channel(&thread))
    }

    async fn add_thread_member(&self, thread_id: u64, user_id: u64) -> Result<(), AppError> {
        ChannelId::new(thread_id)
            .add_thread_member(&self.http, UserId::new(user_id))
            .await?;

        Ok(())
    }

    async fn register_commands(&self, commands: Vec<CommandSpec>) -> Result<usize, AppError> {
        let commands = commands.iter().map(build_command).collect();
        let registered = self.guild_id.set_commands(&self.http, commands).await?;

        Ok(registered.len())
    }
}

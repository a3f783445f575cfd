//! The seams between services and Discord.
//!
//! `GuildGateway` covers every guild-level API call the services make and
//! `InteractionResponder` covers answering a single interaction. Production code
//! uses the Serenity implementations in `discord` and `responder`; tests use the
//! recording fakes in `server::test`.

use serenity::async_trait;

use crate::server::{
    error::AppError,
    model::{
        command::CommandSpec,
        guild::{ChannelInfo, MemberInfo, PermissionRule, RoleInfo},
        message::{MessageSpec, ModalSpec, ReplySpec},
    },
};

/// Guild-scoped Discord operations bound to the single managed guild.
#[async_trait]
pub trait GuildGateway: Send + Sync {
    fn guild_id(&self) -> u64;

    /// User ID of the bot itself, used to recognise its own messages.
    fn bot_user_id(&self) -> u64;

    /// All channels and categories of the guild (threads excluded).
    async fn channels(&self) -> Result<Vec<ChannelInfo>, AppError>;

    /// Fetches any channel by ID, threads included.
    async fn channel(&self, channel_id: u64) -> Result<ChannelInfo, AppError>;

    async fn create_category(&self, name: &str) -> Result<ChannelInfo, AppError>;

    async fn create_text_channel(
        &self,
        name: &str,
        parent_id: u64,
        rules: &[PermissionRule],
    ) -> Result<ChannelInfo, AppError>;

    /// Creates or replaces the overwrite for `rule.role_id` on a channel.
    async fn set_permission(&self, channel_id: u64, rule: PermissionRule) -> Result<(), AppError>;

    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError>;

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError>;

    async fn roles(&self) -> Result<Vec<RoleInfo>, AppError>;

    async fn create_role(&self, name: &str) -> Result<RoleInfo, AppError>;

    async fn members(&self) -> Result<Vec<MemberInfo>, AppError>;

    /// Approximate member count from the REST API, may lag behind recent joins.
    async fn member_count(&self) -> Result<u64, AppError>;

    async fn add_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    async fn remove_member_role(&self, user_id: u64, role_id: u64) -> Result<(), AppError>;

    /// Author IDs of the most recent `limit` messages, newest first.
    async fn recent_message_authors(&self, channel_id: u64, limit: u8)
        -> Result<Vec<u64>, AppError>;

    /// Posts a message and returns its ID.
    async fn send_message(&self, channel_id: u64, message: MessageSpec) -> Result<u64, AppError>;

    async fn create_private_thread(
        &self,
        parent_id: u64,
        name: &str,
    ) -> Result<ChannelInfo, AppError>;

    async fn add_thread_member(&self, thread_id: u64, user_id: u64) -> Result<(), AppError>;

    /// Replaces the full set of guild commands; returns how many were registered.
    async fn register_commands(&self, commands: Vec<CommandSpec>) -> Result<usize, AppError>;
}

/// Answers one interaction.
///
/// An interaction gets exactly one initial response (`reply`, `defer_ephemeral` or
/// `open_modal`); after deferring, the response is filled in with `edit`.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    async fn reply(&self, reply: ReplySpec) -> Result<(), AppError>;

    async fn defer_ephemeral(&self) -> Result<(), AppError>;

    async fn edit(&self, reply: ReplySpec) -> Result<(), AppError>;

    async fn open_modal(&self, modal: ModalSpec) -> Result<(), AppError>;

    fn is_deferred(&self) -> bool;

    /// Shows an ephemeral error to the invoking user, editing the deferred
    /// response when there is one.
    async fn report_failure(&self, message: &str) -> Result<(), AppError> {
        if self.is_deferred() {
            self.edit(ReplySpec::ephemeral(message)).await
        } else {
            self.reply(ReplySpec::ephemeral(message)).await
        }
    }
}

//! Member join, leave and role-change handling.

use dioxus_logger::tracing;

use crate::server::{
    bot::gateway::GuildGateway,
    error::AppError,
    model::guild::{find_role, ChannelKind, MemberInfo},
    service::{
        client_count::{tracked_role_ids, ClientCountService, CounterUpdate},
        layout::{UNVERIFIED_ROLE, WELCOME_CHANNEL},
        notice::welcome_message,
    },
};

pub struct MembershipService<'a, G: GuildGateway> {
    gateway: &'a G,
}

impl<'a, G: GuildGateway> MembershipService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Gives a new member the unverified role and welcomes them.
    ///
    /// A missing unverified role or a failed role assignment does not stop the
    /// welcome message. A missing welcome channel skips the message.
    ///
    /// # Arguments
    /// - `member` - The member who joined
    /// - `cached_member_count` - Guild member count kept by the gateway cache, the
    ///   HTTP approximate count is fetched only when this is `None`
    pub async fn on_join(
        &self,
        member: &MemberInfo,
        cached_member_count: Option<u64>,
    ) -> Result<(), AppError> {
        let roles = self.gateway.roles().await?;

        match find_role(&roles, UNVERIFIED_ROLE) {
            Some(role) => {
                if let Err(e) = self.gateway.add_member_role(member.user_id, role.id).await {
                    tracing::error!(
                        "Failed to assign {} to {}: {}",
                        UNVERIFIED_ROLE,
                        member.username,
                        e
                    );
                }
            }
            None => tracing::debug!("Role {} not found, skipping assignment", UNVERIFIED_ROLE),
        }

        let channels = self.gateway.channels().await?;
        let Some(welcome) = channels
            .iter()
            .find(|channel| channel.kind == ChannelKind::Text && channel.name == WELCOME_CHANNEL)
        else {
            tracing::warn!("Welcome channel {} not found", WELCOME_CHANNEL);
            return Ok(());
        };

        let member_count = match cached_member_count {
            Some(count) => count,
            None => self.gateway.member_count().await?,
        };
        self.gateway
            .send_message(
                welcome.id,
                welcome_message(&member.display_name, &member.mention(), member_count),
            )
            .await?;

        tracing::info!("Welcome message sent to {}", member.username);

        Ok(())
    }

    /// Refreshes the client count when a tracked role appeared or disappeared.
    ///
    /// # Arguments
    /// - `before` - Role IDs before the update, `None` when not cached (always refreshes)
    /// - `after` - Role IDs after the update
    ///
    /// # Returns
    /// - `Ok(None)` - Tracked role membership did not change
    /// - `Ok(Some(CounterUpdate))` - The counter was recomputed
    pub async fn on_roles_changed(
        &self,
        before: Option<&[u64]>,
        after: &[u64],
    ) -> Result<Option<CounterUpdate>, AppError> {
        let roles = self.gateway.roles().await?;
        let tracked = tracked_role_ids(&roles);

        let holds = |role_ids: &[u64]| tracked.iter().any(|id| role_ids.contains(id));
        if before.map(|ids| holds(ids)) == Some(holds(after)) {
            return Ok(None);
        }

        let update = ClientCountService::new(self.gateway).refresh(false).await?;
        Ok(Some(update))
    }

    /// Refreshes the client count when a member holding a tracked role left.
    ///
    /// # Arguments
    /// - `roles_held` - Role IDs of the departed member, `None` when not cached (always refreshes)
    pub async fn on_leave(&self, roles_held: Option<&[u64]>) -> Result<Option<CounterUpdate>, AppError> {
        if let Some(held) = roles_held {
            let roles = self.gateway.roles().await?;
            let tracked = tracked_role_ids(&roles);
            if !tracked.iter().any(|id| held.contains(id)) {
                return Ok(None);
            }
        }

        let update = ClientCountService::new(self.gateway).refresh(false).await?;
        Ok(Some(update))
    }
}

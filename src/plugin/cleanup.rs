use crate::{event::*, log_internal, plugin::*, provision};
use anyhow::Result;

/// Deletes a member's welcome channel when they leave, unless the guild has
/// delete-on-leave switched off.
pub struct Cleanup;

#[serenity::async_trait]
impl Plugin for Cleanup {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    async fn usage(&self, _ctx: &Context) -> Option<String> {
        None
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::MemberLeave { guild_id, user } = event else {
            return Ok(EventHandled::No);
        };

        if !ctx.settings.read().await.get(*guild_id).delete_on_leave {
            return Ok(EventHandled::Yes);
        }

        let Some(channel) = provision::find_existing(ctx, *guild_id, user.id) else {
            return Ok(EventHandled::Yes);
        };

        ctx.http
            .delete_channel(channel.id, Some(provision::DELETE_REASON))
            .await?;
        log_internal!(
            "Deleted welcome channel #{} after {} left",
            channel.name,
            user.name,
        );

        Ok(EventHandled::Yes)
    }
}

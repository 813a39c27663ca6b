use crate::{event::*, helper::*, plugin::*};
use anyhow::Result;

/// Reports the guild's current settings.
pub struct ShowConfig;

#[serenity::async_trait]
impl Plugin for ShowConfig {
    fn name(&self) -> &'static str {
        "showconfig"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} - show current settings",
            prefix,
            self.name()
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Some((msg, _)) = event.is_bot_cmd(ctx, self.name()).await else {
            return Ok(EventHandled::No);
        };
        if !msg.author_can_manage(ctx).await {
            return Ok(EventHandled::Yes);
        }
        let Some(guild_id) = msg.guild_id else {
            return Ok(EventHandled::Yes);
        };

        let gset = ctx.settings.read().await.get(guild_id);
        // A stale id that no longer resolves reads the same as unset
        let role = gset
            .trusted_role_id
            .and_then(|id| role_name(ctx, guild_id, id));
        let category = gset
            .category_id
            .and_then(|id| category_name(ctx, guild_id, id));

        let reply = format!(
            "Trusted role: {}\nCategory: {}\nDelete on leave: {}",
            role.as_deref().unwrap_or("not set"),
            category.as_deref().unwrap_or("auto (will create/find)"),
            if gset.delete_on_leave { "ON" } else { "OFF" },
        );
        msg.reply(ctx.cache_http, reply).await?;
        Ok(EventHandled::Yes)
    }
}

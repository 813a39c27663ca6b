use crate::{event::*, helper::*, plugin::*};
use anyhow::Result;

/// Sets the role granted visibility into every welcome channel.
pub struct SetTrusted;

#[serenity::async_trait]
impl Plugin for SetTrusted {
    fn name(&self) -> &'static str {
        "settrusted"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} <@role|role-id> - who can see all private channels",
            prefix,
            self.name()
        ))
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Some((msg, args)) = event.is_bot_cmd(ctx, self.name()).await else {
            return Ok(EventHandled::No);
        };
        if !msg.author_can_manage(ctx).await {
            return Ok(EventHandled::Yes);
        }
        let Some(guild_id) = msg.guild_id else {
            return Ok(EventHandled::Yes);
        };

        let role = args
            .first()
            .and_then(|arg| parse_role_arg(arg))
            .and_then(|role_id| role_name(ctx, guild_id, role_id).map(|name| (role_id, name)));
        let Some((role_id, name)) = role else {
            msg.reply(ctx.cache_http, "Mention a role or provide a role ID.")
                .await?;
            return Ok(EventHandled::Yes);
        };

        ctx.settings.write().await.entry(guild_id).trusted_role_id = Some(role_id);
        msg.reply(
            ctx.cache_http,
            format!("Trusted role set to **{}**.", name),
        )
        .await?;
        Ok(EventHandled::Yes)
    }
}

use crate::{event::*, helper::*, plugin::*, provision};
use anyhow::Result;
use serenity::all::Mentionable;

/// Creates (or finds) a member's welcome channel on demand.
pub struct SpawnFor;

#[serenity::async_trait]
impl Plugin for SpawnFor {
    fn name(&self) -> &'static str {
        "spawnfor"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} <@user> - create/find a private channel manually",
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

        let Some(user_id) = args.first().and_then(|arg| parse_user_arg(arg)) else {
            msg.reply(ctx.cache_http, "Mention a user.").await?;
            return Ok(EventHandled::Yes);
        };

        let member = match guild_id.member(ctx.cache_http, user_id).await {
            Ok(member) => member,
            Err(_) => {
                msg.reply(ctx.cache_http, "User is not in this server.")
                    .await?;
                return Ok(EventHandled::Yes);
            }
        };

        let channel = provision::provision_for(ctx, &member).await?;
        msg.reply(
            ctx.cache_http,
            format!("Channel ready: {}", channel.id.mention()),
        )
        .await?;
        Ok(EventHandled::Yes)
    }
}

use crate::{event::*, helper::*, plugin::*};
use anyhow::Result;

/// Sets the parent category for newly created welcome channels.
pub struct SetCategory;

#[serenity::async_trait]
impl Plugin for SetCategory {
    fn name(&self) -> &'static str {
        "setcategory"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} <#category|category-id> - parent category for new channels",
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

        // category_name filters out anything that isn't a category
        let category = args
            .first()
            .and_then(|arg| parse_channel_arg(arg))
            .and_then(|id| category_name(ctx, guild_id, id).map(|name| (id, name)));
        let Some((category_id, name)) = category else {
            msg.reply(
                ctx.cache_http,
                "Mention a **category** or provide a category ID.",
            )
            .await?;
            return Ok(EventHandled::Yes);
        };

        ctx.settings.write().await.entry(guild_id).category_id = Some(category_id);
        msg.reply(ctx.cache_http, format!("Category set to **{}**.", name))
            .await?;
        Ok(EventHandled::Yes)
    }
}

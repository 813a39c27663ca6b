use crate::{event::*, helper::MessageHelper, plugin::*};
use anyhow::Result;

/// Toggles whether a member's channel is deleted when they leave.
pub struct DeleteOnLeave;

#[serenity::async_trait]
impl Plugin for DeleteOnLeave {
    fn name(&self) -> &'static str {
        "deleteonleave"
    }

    async fn usage(&self, ctx: &Context) -> Option<String> {
        let prefix = &ctx.cfg.read().await.general.command_prefix;
        Some(format!(
            "{}{} on|off - auto-delete when member leaves",
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

        let Some(enabled) = args.first().and_then(|arg| parse_toggle(arg)) else {
            let prefix = ctx.cfg.read().await.general.command_prefix.clone();
            msg.reply(ctx.cache_http, format!("Use: {}deleteonleave on|off", prefix))
                .await?;
            return Ok(EventHandled::Yes);
        };

        ctx.settings.write().await.entry(guild_id).delete_on_leave = enabled;
        msg.reply(
            ctx.cache_http,
            format!(
                "Delete-on-leave is now **{}**.",
                if enabled { "ON" } else { "OFF" }
            ),
        )
        .await?;
        Ok(EventHandled::Yes)
    }
}

fn parse_toggle(arg: &str) -> Option<bool> {
    match arg.to_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_tokens() {
        for token in ["on", "true", "yes", "ON", "Yes"] {
            assert_eq!(parse_toggle(token), Some(true), "{}", token);
        }
        for token in ["off", "false", "no", "OFF", "No"] {
            assert_eq!(parse_toggle(token), Some(false), "{}", token);
        }
    }

    #[test]
    fn test_rejected_tokens() {
        assert_eq!(parse_toggle("bogus"), None);
        assert_eq!(parse_toggle(""), None);
        assert_eq!(parse_toggle("1"), None);
    }
}

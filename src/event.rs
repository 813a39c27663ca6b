//! The Serenity crate delivers Discord events through callbacks on an
//! event-handler trait, which does not mesh well with the plugin framework
//! here.  The handler translates each callback into this distinct Event enum
//! and feeds it through the plugin chain.

use crate::context::Context;
use serenity::all::{GuildId, Member, Message, Ready, User};

/// A Discord event
pub enum Event {
    Ready(Ready),
    Message(Message),
    MemberJoin(Member),
    MemberLeave { guild_id: GuildId, user: User },
}

impl Event {
    // When an event occurs, iterate over all the plugins to see if any can/should handle it.
    pub async fn handle(self, ctx: Context<'_>) {
        for plugin in crate::plugin::plugins() {
            match plugin.handle(&ctx, &self).await {
                Ok(EventHandled::Yes) => return,
                Ok(EventHandled::No) => continue,
                Err(err) => eprintln!("Error in plugin {}: {}", plugin.name(), err),
            }
        }
    }

    /// Check if a message should be interpreted as a bot command, e.g.
    /// `!cmd foo bar`.  Commands only exist in guilds.  Returns the message
    /// and the terms following the command name.
    pub async fn is_bot_cmd<'a>(
        &'a self,
        ctx: &Context<'_>,
        cmd: &str,
    ) -> Option<(&'a Message, Vec<&'a str>)> {
        let Event::Message(msg) = self else {
            return None;
        };
        if msg.guild_id.is_none() {
            return None;
        }

        let cfg = ctx.cfg.read().await;
        let rest = msg.content.strip_prefix(&cfg.general.command_prefix)?;

        let mut terms = rest.split_whitespace();
        if terms.next() != Some(cmd) {
            return None;
        }
        Some((msg, terms.collect()))
    }
}

pub enum EventHandled {
    Yes,
    No,
}

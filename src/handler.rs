use crate::{config::Config, context::Context, event::Event, settings::GuildSettingsStore};
use serenity::all::{GuildId, Member, Message, Ready, User};
use tokio::sync::RwLock;

/// Discord event handler
pub struct Handler {
    cfg: RwLock<Config>,
    settings: RwLock<GuildSettingsStore>,
}

impl<'a> Handler {
    pub fn new(cfg: Config, settings: GuildSettingsStore) -> Self {
        Self {
            cfg: RwLock::new(cfg),
            settings: RwLock::new(settings),
        }
    }

    fn ctx(&'a self, discord_ctx: &'a serenity::all::Context) -> Context<'a> {
        Context {
            cfg: &self.cfg,
            settings: &self.settings,
            cache: &discord_ctx.cache,
            http: &discord_ctx.http,
            cache_http: discord_ctx,
        }
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        Event::Ready(ready).handle(self.ctx(&discord_ctx)).await;
    }

    async fn message(&self, discord_ctx: serenity::all::Context, msg: Message) {
        Event::Message(msg).handle(self.ctx(&discord_ctx)).await;
    }

    async fn guild_member_addition(&self, discord_ctx: serenity::all::Context, member: Member) {
        Event::MemberJoin(member).handle(self.ctx(&discord_ctx)).await;
    }

    async fn guild_member_removal(
        &self,
        discord_ctx: serenity::all::Context,
        guild_id: GuildId,
        user: User,
        _member: Option<Member>,
    ) {
        Event::MemberLeave { guild_id, user }
            .handle(self.ctx(&discord_ctx))
            .await;
    }
}

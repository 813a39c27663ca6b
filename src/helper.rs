//! Miscellaneous convenience methods

use crate::context::Context;
use serenity::all::{ChannelId, ChannelType, Guild, GuildId, Member, Permissions, RoleId, UserId};

#[serenity::async_trait]
pub trait MessageHelper {
    /// Whether the author may use admin commands: the guild owner, an
    /// administrator, or anyone holding Manage Server.  Messages from anyone
    /// else are dropped without a reply.
    async fn author_can_manage(&self, ctx: &Context) -> bool;
}

#[serenity::async_trait]
impl MessageHelper for serenity::all::Message {
    async fn author_can_manage(&self, ctx: &Context) -> bool {
        let Some(guild_id) = self.guild_id else {
            return false;
        };

        let member = match guild_id.member(ctx.cache_http, self.author.id).await {
            Ok(member) => member,
            Err(_) => return false,
        };

        let Some(guild) = guild_id.to_guild_cached(ctx.cache) else {
            return false;
        };
        if guild.owner_id == member.user.id {
            return true;
        }

        let perms = base_permissions(&guild, &member);
        perms.contains(Permissions::MANAGE_GUILD) || perms.contains(Permissions::ADMINISTRATOR)
    }
}

/// Guild-level permissions from the member's roles plus the everyone role.
fn base_permissions(guild: &Guild, member: &Member) -> Permissions {
    // The everyone role shares its id with the guild.
    let everyone = RoleId::new(guild.id.get());
    let mut perms = guild
        .roles
        .get(&everyone)
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    for role_id in &member.roles {
        if let Some(role) = guild.roles.get(role_id) {
            perms |= role.permissions;
        }
    }

    perms
}

/// Parse a role argument, `<@&id>` or a bare id.
pub fn parse_role_arg(arg: &str) -> Option<RoleId> {
    mention_inner(arg, "<@&").unwrap_or(arg).parse().ok()
}

/// Parse a channel argument, `<#id>` or a bare id.
pub fn parse_channel_arg(arg: &str) -> Option<ChannelId> {
    mention_inner(arg, "<#").unwrap_or(arg).parse().ok()
}

/// Parse a user argument.  Users only match as a mention, `<@id>` or the
/// legacy `<@!id>`, never a bare id.
pub fn parse_user_arg(arg: &str) -> Option<UserId> {
    let inner = mention_inner(arg, "<@!").or_else(|| mention_inner(arg, "<@"))?;
    inner.parse().ok()
}

fn mention_inner<'a>(arg: &'a str, open: &str) -> Option<&'a str> {
    arg.strip_prefix(open)?.strip_suffix('>')
}

/// Name of a cached role.
pub fn role_name(ctx: &Context, guild_id: GuildId, role_id: RoleId) -> Option<String> {
    let guild = guild_id.to_guild_cached(ctx.cache)?;
    guild.roles.get(&role_id).map(|role| role.name.clone())
}

/// Name of a cached category channel.  None when the id is unknown or points
/// at something other than a category.
pub fn category_name(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> Option<String> {
    let guild = guild_id.to_guild_cached(ctx.cache)?;
    guild
        .channels
        .get(&channel_id)
        .filter(|channel| channel.kind == ChannelType::Category)
        .map(|channel| channel.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_arg_accepts_mention_and_id() {
        assert_eq!(parse_role_arg("<@&42>"), Some(RoleId::new(42)));
        assert_eq!(parse_role_arg("42"), Some(RoleId::new(42)));
    }

    #[test]
    fn test_channel_arg_accepts_mention_and_id() {
        assert_eq!(parse_channel_arg("<#42>"), Some(ChannelId::new(42)));
        assert_eq!(parse_channel_arg("42"), Some(ChannelId::new(42)));
    }

    #[test]
    fn test_user_arg_accepts_mentions_only() {
        assert_eq!(parse_user_arg("<@42>"), Some(UserId::new(42)));
        assert_eq!(parse_user_arg("<@!42>"), Some(UserId::new(42)));
        assert_eq!(parse_user_arg("42"), None);
    }

    #[test]
    fn test_garbage_args_are_rejected() {
        assert_eq!(parse_role_arg("abc"), None);
        assert_eq!(parse_role_arg("<@&abc>"), None);
        assert_eq!(parse_channel_arg("<#42"), None);
        assert_eq!(parse_user_arg("<@&42>"), None);
    }
}

//! Creation and lookup of per-member private welcome channels.
//!
//! A channel is tied to its member by a `UID:<id>` marker embedded in the
//! channel topic.  The marker is the only linkage; there is no local index.

use crate::{context::Context, log_internal};
use anyhow::Result;
use serenity::all::{
    ChannelId, ChannelType, CreateChannel, GuildChannel, GuildId, Member, Mentionable,
    PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

/// Category created when none is configured and no existing name matches.
const DEFAULT_CATEGORY_NAME: &str = "👋 welcome-chats";

/// Channel names are capped below Discord's 100-character limit.
const CHANNEL_NAME_MAX: usize = 90;

/// Audit log reason for leave-triggered deletions.
pub const DELETE_REASON: &str = "Member left; cleanup";

/// Topic marker tying a channel to a member.
pub fn member_marker(user_id: UserId) -> String {
    format!("UID:{}", user_id)
}

// Plain substring match; `UID:123` also matches inside `UID:1234`.
fn topic_has_marker(topic: Option<&str>, marker: &str) -> bool {
    topic.is_some_and(|topic| topic.contains(marker))
}

/// First cached text channel in the guild whose topic carries the member's
/// marker, if any.  Read-only; only as fresh as the channel cache.
pub fn find_existing(ctx: &Context<'_>, guild_id: GuildId, user_id: UserId) -> Option<GuildChannel> {
    let marker = member_marker(user_id);
    let guild = guild_id.to_guild_cached(ctx.cache)?;

    guild
        .channels
        .values()
        .find(|channel| {
            channel.kind == ChannelType::Text
                && topic_has_marker(channel.topic.as_deref(), &marker)
        })
        .cloned()
}

fn category_name_matches(name: &str) -> bool {
    let name = name.to_lowercase();
    ["welcome", "intake", "onboard"]
        .iter()
        .any(|pat| name.contains(pat))
}

fn cached_category(
    ctx: &Context<'_>,
    guild_id: GuildId,
    configured: Option<ChannelId>,
) -> Option<ChannelId> {
    let guild = guild_id.to_guild_cached(ctx.cache)?;

    // A configured id wins, but only while it still names a category.
    if let Some(id) = configured {
        if guild
            .channels
            .get(&id)
            .is_some_and(|channel| channel.kind == ChannelType::Category)
        {
            return Some(id);
        }
    }

    guild
        .channels
        .values()
        .find(|channel| {
            channel.kind == ChannelType::Category && category_name_matches(&channel.name)
        })
        .map(|channel| channel.id)
}

/// Category to parent new channels under: the configured one if it still
/// exists, else an existing category with an onboarding-style name, else a
/// newly created one.
async fn ensure_category(
    ctx: &Context<'_>,
    guild_id: GuildId,
    configured: Option<ChannelId>,
) -> Result<ChannelId> {
    if let Some(id) = cached_category(ctx, guild_id, configured) {
        return Ok(id);
    }

    let builder = CreateChannel::new(DEFAULT_CATEGORY_NAME).kind(ChannelType::Category);
    let category = guild_id.create_channel(ctx.cache_http, builder).await?;
    log_internal!("Created category #{}", category.name);
    Ok(category.id)
}

fn channel_name_for(username: &str) -> String {
    let sanitized: String = username
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    let mut name = format!("welcome-{}", sanitized);
    // All ASCII after sanitizing, so a byte truncation lands on a char boundary
    name.truncate(CHANNEL_NAME_MAX);
    name
}

fn topic_for(member: &Member) -> String {
    format!(
        "Private welcome for {} | {}",
        member.user.tag(),
        member_marker(member.user.id)
    )
}

fn overwrites_for(
    guild_id: GuildId,
    member_id: UserId,
    bot_id: UserId,
    trusted_role: Option<RoleId>,
) -> Vec<PermissionOverwrite> {
    let member_allow = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::ATTACH_FILES
        | Permissions::EMBED_LINKS;
    let bot_allow = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::MANAGE_CHANNELS
        | Permissions::MANAGE_MESSAGES;

    // The everyone role shares its id with the guild.
    let everyone = RoleId::new(guild_id.get());

    let mut overwrites = vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            kind: PermissionOverwriteType::Role(everyone),
        },
        PermissionOverwrite {
            allow: member_allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(member_id),
        },
        PermissionOverwrite {
            allow: bot_allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot_id),
        },
    ];

    if let Some(role_id) = trusted_role {
        overwrites.push(PermissionOverwrite {
            allow: member_allow,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(role_id),
        });
    }

    overwrites
}

/// Find or create the member's private welcome channel.
///
/// Returns the existing channel untouched when one already carries the
/// member's marker: no second creation, no repeated welcome message, no
/// permission re-application.  There is no lock between the existence check
/// and the create, so two concurrent joins for the same member can race and
/// produce duplicate channels.
pub async fn provision_for(ctx: &Context<'_>, member: &Member) -> Result<GuildChannel> {
    let guild_id = member.guild_id;
    let gset = ctx.settings.read().await.get(guild_id);

    let category_id = ensure_category(ctx, guild_id, gset.category_id).await?;

    if let Some(existing) = find_existing(ctx, guild_id, member.user.id) {
        return Ok(existing);
    }

    let bot_id = ctx.cache.current_user().id;
    let builder = CreateChannel::new(channel_name_for(&member.user.name))
        .kind(ChannelType::Text)
        .category(category_id)
        .topic(topic_for(member))
        .permissions(overwrites_for(
            guild_id,
            member.user.id,
            bot_id,
            gset.trusted_role_id,
        ));
    let channel = guild_id.create_channel(ctx.cache_http, builder).await?;
    log_internal!("Created welcome channel #{} for {}", channel.name, member.user.name);

    channel
        .id
        .say(
            ctx.cache_http,
            format!(
                "Welcome {}! This private channel is just for you and our trusted team. 🎉",
                member.mention()
            ),
        )
        .await?;

    Ok(channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name_replaces_disallowed_characters() {
        assert_eq!(channel_name_for("Ω_Weird!!Name"), "welcome---weird--name");
        assert_eq!(channel_name_for("alice42"), "welcome-alice42");
        assert_eq!(channel_name_for("Bob-Smith"), "welcome-bob-smith");
    }

    #[test]
    fn test_channel_name_is_truncated() {
        let name = channel_name_for(&"a".repeat(120));
        assert_eq!(name.len(), CHANNEL_NAME_MAX);
        assert!(name.starts_with("welcome-a"));
    }

    #[test]
    fn test_marker_format() {
        assert_eq!(member_marker(UserId::new(42)), "UID:42");
    }

    #[test]
    fn test_marker_match_is_substring_containment() {
        let marker = member_marker(UserId::new(123));
        assert!(topic_has_marker(
            Some("Private welcome for a#1 | UID:123"),
            &marker
        ));
        assert!(!topic_has_marker(Some("no marker here"), &marker));
        assert!(!topic_has_marker(None, &marker));
        // Known edge: a shorter id also matches inside a longer one
        assert!(topic_has_marker(
            Some("Private welcome for b#2 | UID:1234"),
            &marker
        ));
    }

    #[test]
    fn test_category_name_pattern() {
        assert!(category_name_matches("👋 welcome-chats"));
        assert!(category_name_matches("Onboarding"));
        assert!(category_name_matches("INTAKE lobby"));
        assert!(!category_name_matches("general"));
    }

    #[test]
    fn test_default_overwrites() {
        let guild_id = GuildId::new(10);
        let overwrites = overwrites_for(guild_id, UserId::new(20), UserId::new(30), None);
        assert_eq!(overwrites.len(), 3);

        let everyone = &overwrites[0];
        assert!(matches!(
            everyone.kind,
            PermissionOverwriteType::Role(id) if id == RoleId::new(10)
        ));
        assert!(everyone.deny.contains(Permissions::VIEW_CHANNEL));
        assert!(everyone.allow.is_empty());

        let member = &overwrites[1];
        assert!(matches!(
            member.kind,
            PermissionOverwriteType::Member(id) if id == UserId::new(20)
        ));
        assert!(member.allow.contains(Permissions::VIEW_CHANNEL));
        assert!(member.allow.contains(Permissions::ATTACH_FILES));
        assert!(!member.allow.contains(Permissions::MANAGE_CHANNELS));

        let bot = &overwrites[2];
        assert!(matches!(
            bot.kind,
            PermissionOverwriteType::Member(id) if id == UserId::new(30)
        ));
        assert!(bot.allow.contains(Permissions::MANAGE_CHANNELS));
        assert!(bot.allow.contains(Permissions::MANAGE_MESSAGES));
    }

    #[test]
    fn test_trusted_role_overwrite_is_appended() {
        let overwrites =
            overwrites_for(GuildId::new(10), UserId::new(20), UserId::new(30), Some(RoleId::new(40)));
        assert_eq!(overwrites.len(), 4);

        let trusted = &overwrites[3];
        assert!(matches!(
            trusted.kind,
            PermissionOverwriteType::Role(id) if id == RoleId::new(40)
        ));
        assert!(trusted.allow.contains(Permissions::VIEW_CHANNEL));
        assert!(trusted.allow.contains(Permissions::READ_MESSAGE_HISTORY));
        assert!(!trusted.allow.contains(Permissions::MANAGE_MESSAGES));
    }
}

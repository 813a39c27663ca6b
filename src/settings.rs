//! Per-guild runtime settings.  State which is lost across sessions; admins
//! re-enter it through commands after a restart.

use serenity::all::{ChannelId, GuildId, RoleId};
use std::collections::HashMap;

/// Behavior switches an admin can change at runtime, one record per guild.
#[derive(Clone)]
pub struct GuildSettings {
    /// Role allowed into every private welcome channel.
    pub trusted_role_id: Option<RoleId>,
    /// Parent category for new welcome channels.  Resolved automatically when
    /// unset.
    pub category_id: Option<ChannelId>,
    /// Whether a member's channel is removed when they leave.
    pub delete_on_leave: bool,
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            trusted_role_id: None,
            category_id: None,
            delete_on_leave: true,
        }
    }
}

pub struct GuildSettingsStore(HashMap<GuildId, GuildSettings>);

impl GuildSettingsStore {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Record for `guild_id`, created with defaults on first access.
    pub fn entry(&mut self, guild_id: GuildId) -> &mut GuildSettings {
        self.0.entry(guild_id).or_default()
    }

    /// Snapshot of the record for `guild_id`, defaults when absent.
    pub fn get(&self, guild_id: GuildId) -> GuildSettings {
        self.0.get(&guild_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let gset = GuildSettings::default();
        assert!(gset.trusted_role_id.is_none());
        assert!(gset.category_id.is_none());
        assert!(gset.delete_on_leave);
    }

    #[test]
    fn test_entry_persists_changes() {
        let mut store = GuildSettingsStore::new();
        let guild = GuildId::new(1);

        store.entry(guild).delete_on_leave = false;
        assert!(!store.get(guild).delete_on_leave);

        store.entry(guild).trusted_role_id = Some(RoleId::new(7));
        assert_eq!(store.get(guild).trusted_role_id, Some(RoleId::new(7)));
        // Earlier change survives later ones
        assert!(!store.get(guild).delete_on_leave);
    }

    #[test]
    fn test_guilds_are_isolated() {
        let mut store = GuildSettingsStore::new();
        store.entry(GuildId::new(1)).delete_on_leave = false;

        assert!(store.get(GuildId::new(2)).delete_on_leave);
    }
}

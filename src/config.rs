use anyhow::{anyhow, Result};
use std::io::ErrorKind;
use std::path::PathBuf;

const CONFIG_PATH_REL_HOME: &str = ".config/concierge/config.toml";

/// Environment variable that takes precedence over the configured token.
const TOKEN_ENV_VAR: &str = "DISCORD_TOKEN";

/// Bot configuration
#[derive(serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: General,
}

#[derive(serde::Deserialize)]
pub struct General {
    #[serde(default)]
    pub discord_token: Option<String>,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

fn default_command_prefix() -> String {
    "!".to_string()
}

impl Default for General {
    fn default() -> Self {
        Self {
            discord_token: None,
            command_prefix: default_command_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: General::default(),
        }
    }
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|p| p.join(CONFIG_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }

    /// Load the configuration file.  A missing file yields the defaults, so
    /// the bot can run configured through the environment alone.
    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(anyhow!(
                    "Could not read configuration at `{}`: {}",
                    path.to_string_lossy(),
                    e
                ))
            }
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow!(
                "Could not parse configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        Ok(config)
    }

    /// The bot token, preferring the environment over the config file.
    pub fn token(&self) -> Result<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .or_else(|| self.general.discord_token.clone())
            .ok_or_else(|| {
                anyhow!(
                    "Set {} or `general.discord_token` in the config file",
                    TOKEN_ENV_VAR
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general.command_prefix, "!");
        assert!(config.general.discord_token.is_none());
    }

    #[test]
    fn test_explicit_values_parse() {
        let config: Config = toml::from_str(
            "[general]\ndiscord_token = \"abc\"\ncommand_prefix = \";\"\n",
        )
        .unwrap();
        assert_eq!(config.general.command_prefix, ";");
        assert_eq!(config.general.discord_token.as_deref(), Some("abc"));
    }
}

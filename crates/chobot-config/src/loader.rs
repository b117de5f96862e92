//! Configuration loading utilities

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable pointing at the configuration file.
pub const CONFIG_PATH_VAR: &str = "CHOBOT_CONFIG_PATH";

/// Files looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["chobot.yaml", "chobot.yml"];

/// Env file loaded into the process environment before the configuration.
pub const DEFAULT_ENV_FILE: &str = "ini.env";

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `KEY=value` pairs from `path` into the process environment.
    ///
    /// Variables already set are left untouched. Returns `false` when the
    /// file does not exist.
    pub fn load_env_file(path: impl AsRef<Path>) -> ConfigResult<bool> {
        match dotenvy::from_filename(path.as_ref()) {
            Ok(_) => Ok(true),
            Err(err) if err.not_found() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Finds the configuration file: `CHOBOT_CONFIG_PATH` first, then the
    /// default file names in the working directory.
    pub fn resolve_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Load configuration from the resolved file (or defaults) with
    /// environment variable overrides, then validate it.
    pub fn load() -> ConfigResult<Config> {
        Self::load_from(Self::resolve_path().as_deref())
    }

    /// Like [`ConfigLoader::load`] with an explicit file. `None` starts from defaults.
    pub fn load_from(path: Option<&Path>) -> ConfigResult<Config> {
        let mut config = match path {
            Some(path) => Self::parse_file(path)?,
            None => Config::default(),
        };

        Self::apply_env_overrides(&mut config, |var| env::var(var).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a YAML file without overrides or validation.
    pub fn parse_file(path: &Path) -> ConfigResult<Config> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&content)
    }

    /// Parses YAML text without overrides or validation.
    pub fn parse_str(content: &str) -> ConfigResult<Config> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply environment variable overrides to configuration.
    ///
    /// `lookup` resolves a variable name to its value; empty values are ignored.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(token) = var("DISCORD_BOT_TOKEN").or_else(|| var("DISCORD_TOKEN")) {
            config.discord.token = token;
        }

        if let Some(guild_id) = var("CHOBOT_GUILD_ID") {
            config.discord.guild_id = Some(parse_var("CHOBOT_GUILD_ID", &guild_id)?);
        }

        if let Some(channel_id) = var("CHOBOT_RELAY_CHANNEL_ID") {
            config.discord.relay_channel_id = Some(parse_var("CHOBOT_RELAY_CHANNEL_ID", &channel_id)?);
        }

        if let Some(url) = var("CHOBOT_INVITE_URL") {
            config.invite.url = url;
        }

        if let Some(level) = var("CHOBOT_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> ConfigResult<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| ConfigError::EnvParse {
        var: var.to_string(),
        source,
    })
}

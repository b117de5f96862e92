//! Runtime validation of a loaded configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.discord.token.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Discord token cannot be empty".to_string(),
            ));
        }

        if !self.invite.url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "Invite URL must use https: {}",
                self.invite.url
            )));
        }

        if !self.invite.banner_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "Invite banner URL must use https: {}",
                self.invite.banner_url
            )));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = "token".to_string();
        config
    }

    #[test]
    fn test_default_config_needs_token() {
        let config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let mut config = valid_config();
        config.discord.token = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_insecure_invite_is_rejected() {
        let mut config = valid_config();
        config.invite.url = "http://discord.gg/D48QWY6MhK".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invite URL"));
    }

    #[test]
    fn test_insecure_banner_is_rejected() {
        let mut config = valid_config();
        config.invite.banner_url = "ftp://example.com/welcome.gif".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_log_level_is_rejected() {
        let mut config = valid_config();
        config.logging.level = String::new();
        assert!(config.validate().is_err());
    }
}

//! Test utilities and shared test helpers for Chobot.
//!
//! Fixtures and helpers used by the unit and integration tests of every
//! crate in the workspace. Enabled with the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        // Another test harness may already own the global subscriber.
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::{ChannelId, GuildId, UserId};

    /// Create a test guild ID.
    pub const fn test_guild_id() -> GuildId {
        GuildId(737751372790890508)
    }

    /// Create a test channel ID.
    pub const fn test_channel_id() -> ChannelId {
        ChannelId(1385795977600045217)
    }

    /// Create a test user ID.
    pub const fn test_user_id() -> UserId {
        UserId(987654321098765432)
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML string.
    pub const fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"
"#
    }

    /// A configuration with every field set, as YAML string.
    pub const fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  guild_id: 737751372790890508\n",
            "  relay_channel_id: 1385795977600045217\n",
            "\n",
            "invite:\n",
            "  url: \"https://discord.gg/example\"\n",
            "  banner_url: \"https://example.com/welcome.gif\"\n",
            "\n",
            "logging:\n",
            "  level: \"debug\"\n",
            "  format: \"compact\"\n",
            "  file_path: \"logs/chobot.log\"\n",
            "  include_targets: false\n"
        )
    }
}

/// Property-based testing utilities using proptest.
pub mod property_testing {
    use crate::UserId;
    use proptest::prelude::*;

    /// Strategy for generating valid Discord user IDs.
    pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
        (100000000000000000u64..=999999999999999999u64).prop_map(UserId)
    }

    /// Strategy for die sizes accepted by the `/rolar` command.
    pub fn die_size_strategy() -> impl Strategy<Value = i64> {
        prop_oneof![2i64..=100, Just(20i64), 101i64..=1_000_000]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_init_logging_multiple_calls() {
        // Should not panic when called multiple times
        init_test_logging();
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_fixture_yaml_parses() {
        let minimal: serde_yaml::Value =
            serde_yaml::from_str(config_fixtures::minimal_config_yaml()).unwrap();
        assert_eq!(minimal["discord"]["token"].as_str(), Some("test_token"));

        let full: serde_yaml::Value =
            serde_yaml::from_str(config_fixtures::full_config_yaml()).unwrap();
        assert_eq!(full["logging"]["format"].as_str(), Some("compact"));
    }

    proptest! {
        #[test]
        fn test_property_user_mention(id in property_testing::user_id_strategy()) {
            let mention = id.mention();
            prop_assert!(mention.starts_with("<@"));
            prop_assert!(mention.ends_with('>'));
            prop_assert_eq!(mention[2..mention.len() - 1].parse::<u64>().unwrap(), id.0);
        }
    }
}

//! Configuration schema definitions using serde.

use chobot_common::{ChannelId, GuildId, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main configuration structure for Chobot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Invite command configuration.
    pub invite: InviteConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Guild to register commands in. Commands are registered globally when unset.
    pub guild_id: Option<GuildId>,
    /// Channel whose webhook posts are trimmed down to the latest one.
    pub relay_channel_id: Option<ChannelId>,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &if self.token.is_empty() { "<unset>" } else { "<redacted>" })
            .field("guild_id", &self.guild_id)
            .field("relay_channel_id", &self.relay_channel_id)
            .finish()
    }
}

/// `/convite` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// Server invite link posted as the message content.
    pub url: String,
    /// Banner image shown in the invite embed.
    pub banner_url: String,
}

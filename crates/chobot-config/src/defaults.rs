//! Default values.

use crate::schema::InviteConfig;

/// Default server invite link.
pub const DEFAULT_INVITE_URL: &str = "https://discord.gg/D48QWY6MhK";

/// Default invite banner.
pub const DEFAULT_INVITE_BANNER_URL: &str = "https://i.ibb.co/fn7VvQZ/welcome.gif";

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_INVITE_URL.to_string(),
            banner_url: DEFAULT_INVITE_BANNER_URL.to_string(),
        }
    }
}

//! Main entry point for Chobot.

use chobot_bot::{BotResult, Chobot};
use chobot_common::init_logging;
use chobot_config::{ConfigLoader, DEFAULT_ENV_FILE};
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let env_file_loaded = ConfigLoader::load_env_file(DEFAULT_ENV_FILE)?;

    // Load configuration
    let config = ConfigLoader::load()?;

    // Initialize tracing; the guard flushes the log file on exit
    let _log_guard = init_logging(&config.logging)?;

    info!(
        config_path = ?ConfigLoader::resolve_path(),
        env_file_loaded,
        "Starting Chobot"
    );

    // Create and start bot
    let bot = Chobot::new(config);

    if let Err(e) = bot.start().await {
        error!("Bot stopped: {}", e);
        return Err(e);
    }

    Ok(())
}

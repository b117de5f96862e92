//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use chobot_commands::{create_framework, Data, Error};
use chobot_common::GuildId;
use chobot_config::Config;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
pub struct Chobot {
    config: Arc<Config>,
}

impl Chobot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration the bot runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gateway intents. Guild message events feed the relay watcher; message
    /// content is never read.
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::non_privileged()
    }

    /// Starts the bot and runs until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        let config = Arc::clone(&self.config);

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!(user = %ready.user.name, "connected to Discord");
                    ctx.set_presence(None, serenity::OnlineStatus::DoNotDisturb);
                    register_commands(ctx, &framework.options().commands, config.discord.guild_id)
                        .await;
                    Ok(Data::new(config))
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&self.config.discord.token, Self::intents())
            .framework(framework)
            .await?;

        client.start().await?;
        Ok(())
    }
}

/// Registers the slash commands in `guild_id`, or globally when unset.
///
/// A failure is logged and the bot keeps running.
async fn register_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<Data, Error>],
    guild_id: Option<GuildId>,
) {
    let result = match guild_id {
        Some(guild) => {
            poise::builtins::register_in_guild(ctx, commands, serenity::GuildId::new(guild.0)).await
        }
        None => poise::builtins::register_globally(ctx, commands).await,
    };

    match result {
        Ok(()) => info!(count = commands.len(), guild = ?guild_id, "commands registered"),
        Err(err) => error!(error = %err, guild = ?guild_id, "failed to register commands"),
    }
}

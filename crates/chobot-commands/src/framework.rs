//! Poise framework setup and command registration logic.

use crate::relay::RelayTracker;
use chobot_config::Config;
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Latest webhook post in the relay channel.
    pub relay: RelayTracker,
}

impl Data {
    /// Creates the shared data for a freshly started bot.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            relay: RelayTracker::new(),
        }
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Builds every command with its catalog descriptions applied.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    let mut commands = vec![
        crate::comandos::comandos(),
        crate::convite::convite(),
        crate::rolar::rolar(),
    ];
    for command in &mut commands {
        if !crate::catalog::apply(command) {
            warn!(command = %command.name, "command missing from catalog");
        }
    }
    commands
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        event_handler: |ctx, event, framework, data| {
            Box::pin(crate::relay::event_handler(ctx, event, framework, data))
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    if let poise::FrameworkError::Command { error: err, ctx, .. } = &error {
        error!(command = %ctx.command().name, error = %err, "command failed");
    }

    if let Err(e) = poise::builtins::on_error(error).await {
        error!(error = %e, "failed to report framework error");
    }
}

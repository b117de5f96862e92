//! Relay channel watcher.
//!
//! An external service posts into the relay channel through a webhook. Only
//! its latest post should stay visible, so every new webhook message
//! replaces the previous one.

use crate::framework::{Data, Error};
use chobot_common::ChannelId;
use poise::serenity_prelude as serenity;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Remembers the latest webhook message seen in the relay channel.
#[derive(Debug, Default)]
pub struct RelayTracker {
    last: Mutex<Option<serenity::MessageId>>,
}

impl RelayTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message_id` as the latest post and returns the one it replaces.
    pub async fn observe(&self, message_id: serenity::MessageId) -> Option<serenity::MessageId> {
        let mut last = self.last.lock().await;
        let stale = last.filter(|previous| *previous != message_id);
        *last = Some(message_id);
        stale
    }

    /// The latest post seen, if any.
    pub async fn latest(&self) -> Option<serenity::MessageId> {
        *self.last.lock().await
    }
}

/// Poise event hook.
pub async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        handle_message(ctx, data, new_message).await;
    }
    Ok(())
}

/// Whether a message is a webhook post in the configured relay channel.
///
/// Always `false` when no relay channel is configured.
pub fn is_relay_post(
    relay: Option<ChannelId>,
    channel: serenity::ChannelId,
    webhook: Option<serenity::WebhookId>,
) -> bool {
    match relay {
        Some(relay) => channel.get() == relay.0 && webhook.is_some(),
        None => false,
    }
}

async fn handle_message(ctx: &serenity::Context, data: &Data, message: &serenity::Message) {
    if !is_relay_post(
        data.config.discord.relay_channel_id,
        message.channel_id,
        message.webhook_id,
    ) {
        return;
    }

    let Some(stale) = data.relay.observe(message.id).await else {
        return;
    };

    match message.channel_id.delete_message(ctx, stale).await {
        Ok(()) => debug!(message_id = %stale, "removed previous relay message"),
        Err(err) if is_not_found(&err) => {
            debug!(message_id = %stale, "previous relay message already gone");
        }
        Err(err) => warn!(message_id = %stale, error = %err, "failed to remove previous relay message"),
    }
}

fn is_not_found(err: &::serenity::Error) -> bool {
    matches!(
        err,
        ::serenity::Error::Http(::serenity::http::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

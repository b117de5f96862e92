//! `/comandos`: lists the bot's commands.

use crate::catalog::CATALOG;
use crate::framework::{Context, Error};
use crate::render;
use poise::CreateReply;

/// Lists the bot's commands.
#[poise::command(slash_command)]
pub async fn comandos(ctx: Context<'_>) -> Result<(), Error> {
    ctx.send(CreateReply::default().embed(render::command_list_embed(CATALOG)))
        .await?;
    Ok(())
}

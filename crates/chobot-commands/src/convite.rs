//! `/convite`: posts the server invite.

use crate::framework::{Context, Error};
use crate::render;
use poise::CreateReply;

/// Posts the server invite link.
///
/// The link goes in the message content so Discord unfurls it into an invite card.
#[poise::command(slash_command)]
pub async fn convite(ctx: Context<'_>) -> Result<(), Error> {
    let invite = &ctx.data().config.invite;

    ctx.send(
        CreateReply::default()
            .content(invite.url.clone())
            .embed(render::invite_embed(&invite.banner_url)),
    )
    .await?;
    Ok(())
}

//! `/rolar`: rolls a die of the caller's chosen size.

use crate::framework::{Context, Error};
use crate::render;
use chobot_common::UserId;
use chobot_dice::{DiceError, RollOutcome};
use poise::CreateReply;
use tracing::{info, warn};

/// Ephemeral reply for die sizes that slip past Discord's own minimum check.
pub const INVALID_DIE_MESSAGE: &str = "O valor do dado deve ser no mínimo 2.";

/// What `/rolar` answers for a given die size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollReply {
    /// The size was rejected. Only the caller sees the answer.
    Rejected(DiceError),
    /// The die was rolled. The result is posted in the channel.
    Rolled(RollOutcome),
}

impl RollReply {
    /// Rolls a `d`-sided die with the thread RNG.
    pub fn roll(d: i64) -> Self {
        match chobot_dice::evaluate(d) {
            Ok(outcome) => Self::Rolled(outcome),
            Err(err) => Self::Rejected(err),
        }
    }

    /// Builds the Discord reply, crediting the roll to `roller`.
    pub fn into_reply(self, roller: UserId) -> CreateReply {
        match self {
            Self::Rejected(_) => CreateReply::default()
                .content(INVALID_DIE_MESSAGE)
                .ephemeral(true),
            Self::Rolled(outcome) => {
                CreateReply::default().embed(render::render_roll(&outcome, roller).into())
            }
        }
    }
}

/// Rolls a die.
#[poise::command(slash_command)]
pub async fn rolar(
    ctx: Context<'_>,
    #[description = "Valor do dado"]
    #[min = 2]
    d: i64,
) -> Result<(), Error> {
    let roller = UserId(ctx.author().id.get());
    let reply = RollReply::roll(d);
    match &reply {
        RollReply::Rejected(err) => warn!(die_size = d, error = %err, "rejected die size"),
        RollReply::Rolled(outcome) => info!(
            user = %roller,
            die_size = d,
            result = outcome.result(),
            tier = ?outcome.tier(),
            "rolled die"
        ),
    }

    ctx.send(reply.into_reply(roller)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chobot_dice::DieSize;

    #[test]
    fn test_small_die_is_rejected() {
        assert_eq!(
            RollReply::roll(1),
            RollReply::Rejected(DiceError::InvalidArgument { die_size: 1 })
        );
        assert!(matches!(RollReply::roll(-3), RollReply::Rejected(_)));
    }

    #[test]
    fn test_rejected_reply_is_ephemeral() {
        let reply = RollReply::roll(1).into_reply(UserId(42));
        assert_eq!(reply.content.as_deref(), Some(INVALID_DIE_MESSAGE));
        assert_eq!(reply.ephemeral, Some(true));
        assert!(reply.embeds.is_empty());
    }

    #[test]
    fn test_valid_die_is_rolled() {
        let RollReply::Rolled(outcome) = RollReply::roll(6) else {
            panic!("a d6 must roll");
        };
        assert_eq!(outcome.die_size(), DieSize::try_from(6).unwrap());
        assert!((1..=6).contains(&outcome.result()));
    }

    #[test]
    fn test_rolled_reply_is_public_embed() {
        let reply = RollReply::roll(6).into_reply(UserId(42));
        assert_eq!(reply.embeds.len(), 1);
        assert!(reply.content.is_none());
        assert_ne!(reply.ephemeral, Some(true));

        let json = serde_json::to_value(&reply.embeds[0]).unwrap();
        assert_eq!(json["author"]["name"], "D6 🎲");
    }
}

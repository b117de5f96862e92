//! Embed construction for command replies.

use crate::catalog::CommandSpec;
use chobot_common::UserId;
use chobot_dice::{RollOutcome, Tier};
use poise::serenity_prelude as serenity;

/// Normal roll colour.
pub const BLUE: u32 = 0x3498DB;
/// Critical success colour.
pub const GREEN: u32 = 0x2ECC71;
/// Critical failure colour.
pub const RED: u32 = 0xE74C3C;
/// Command list colour.
pub const YELLOW: u32 = 0xF1C40F;
/// Invite colour, blends with Discord's dark theme.
pub const DARK_GREY: u32 = 0x2F3136;

/// Discord rejects empty field names and values.
pub const BLANK: &str = "\u{200b}";

/// Image shown on a critical success.
pub const CRITICAL_SUCCESS_IMAGE: &str = "https://i.ibb.co/wyQPZcT/success.gif";
/// Image shown on a critical failure.
pub const CRITICAL_FAILURE_IMAGE: &str = "https://i.ibb.co/N9wwKW8/fail.gif";

/// Visual treatment of a roll tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    /// Embed colour.
    pub colour: u32,
    /// Bold headline above the result.
    pub headline: Option<&'static str>,
    /// Image below the result.
    pub image_url: Option<&'static str>,
}

/// Looks up the treatment of `tier`.
pub const fn tier_style(tier: Tier) -> TierStyle {
    match tier {
        Tier::Normal => TierStyle {
            colour: BLUE,
            headline: None,
            image_url: None,
        },
        Tier::CriticalSuccess => TierStyle {
            colour: GREEN,
            headline: Some("**ACERTO CRÍTICO!**"),
            image_url: Some(CRITICAL_SUCCESS_IMAGE),
        },
        Tier::CriticalFailure => TierStyle {
            colour: RED,
            headline: Some("**FALHA CRÍTICA!**"),
            image_url: Some(CRITICAL_FAILURE_IMAGE),
        },
    }
}

/// Presentation of a roll, independent of the Discord builder types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollEmbed {
    /// Embed colour.
    pub colour: u32,
    /// Author line, e.g. `D20 🎲`.
    pub author: String,
    /// Headline field, criticals only.
    pub headline: Option<&'static str>,
    /// Who rolled what.
    pub body: String,
    /// Image, criticals only.
    pub image_url: Option<&'static str>,
}

/// Renders `outcome` as rolled by `roller`.
pub fn render_roll(outcome: &RollOutcome, roller: UserId) -> RollEmbed {
    let style = tier_style(outcome.tier());
    RollEmbed {
        colour: style.colour,
        author: format!("{} 🎲", outcome.die_size()),
        headline: style.headline,
        body: format!("**{}** rolou um **{}**", roller.mention(), outcome.result()),
        image_url: style.image_url,
    }
}

impl From<RollEmbed> for serenity::CreateEmbed {
    fn from(roll: RollEmbed) -> Self {
        let mut embed = Self::new()
            .colour(roll.colour)
            .author(serenity::CreateEmbedAuthor::new(roll.author));

        if let Some(headline) = roll.headline {
            embed = embed.field(headline, BLANK, false);
        }
        embed = embed.field(BLANK, roll.body, false);
        if let Some(image_url) = roll.image_url {
            embed = embed.image(image_url);
        }
        embed
    }
}

/// One field per command, in catalog order.
pub fn command_list_embed(catalog: &[CommandSpec]) -> serenity::CreateEmbed {
    catalog.iter().fold(
        serenity::CreateEmbed::new().colour(YELLOW),
        |embed, spec| embed.field(spec.invocation(), spec.description, false),
    )
}

/// Banner shown under the invite link.
pub fn invite_embed(banner_url: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .colour(DARK_GREY)
        .image(banner_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chobot_dice::DieSize;

    fn roll(size: i64, result: u64) -> RollOutcome {
        RollOutcome::new(DieSize::try_from(size).unwrap(), result).unwrap()
    }

    #[test]
    fn test_normal_roll() {
        let embed = render_roll(&roll(6, 4), UserId(42));
        assert_eq!(
            embed,
            RollEmbed {
                colour: BLUE,
                author: "D6 🎲".to_string(),
                headline: None,
                body: "**<@42>** rolou um **4**".to_string(),
                image_url: None,
            }
        );
    }

    #[test]
    fn test_critical_success() {
        let embed = render_roll(&roll(20, 20), UserId(7));
        assert_eq!(embed.colour, GREEN);
        assert_eq!(embed.author, "D20 🎲");
        assert_eq!(embed.headline, Some("**ACERTO CRÍTICO!**"));
        assert_eq!(embed.image_url, Some(CRITICAL_SUCCESS_IMAGE));
        assert_eq!(embed.body, "**<@7>** rolou um **20**");
    }

    #[test]
    fn test_critical_failure() {
        let embed = render_roll(&roll(20, 1), UserId(7));
        assert_eq!(embed.colour, RED);
        assert_eq!(embed.headline, Some("**FALHA CRÍTICA!**"));
        assert_eq!(embed.image_url, Some(CRITICAL_FAILURE_IMAGE));
    }

    #[test]
    fn test_twenty_on_bigger_die_is_plain() {
        let embed = render_roll(&roll(100, 20), UserId(7));
        assert_eq!(embed.colour, BLUE);
        assert!(embed.headline.is_none());
        assert!(embed.image_url.is_none());
    }

    #[test]
    fn test_only_criticals_have_headline_and_image() {
        for tier in [Tier::Normal, Tier::CriticalSuccess, Tier::CriticalFailure] {
            let style = tier_style(tier);
            assert_eq!(style.headline.is_some(), tier.is_critical());
            assert_eq!(style.image_url.is_some(), tier.is_critical());
        }
    }
}

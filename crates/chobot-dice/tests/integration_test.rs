//! Integration tests for chobot-dice crate.
//!
//! These tests check the roll guarantees over the whole range of die sizes
//! the `/rolar` command accepts, plus a uniformity smoke test.

use chobot_common::test_utils::property_testing::die_size_strategy;
use chobot_dice::{evaluate, DiceError, DieSize, RollOutcome, Tier, CRITICAL_DIE_SIZE};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_result_always_in_range(size in die_size_strategy()) {
        let outcome = evaluate(size).unwrap();
        prop_assert!(outcome.result() >= 1);
        prop_assert!(outcome.result() <= outcome.die_size().get());
        prop_assert_eq!(outcome.die_size().get(), size as u64);
    }

    #[test]
    fn test_non_d20_is_always_normal(size in die_size_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(size as u64 != CRITICAL_DIE_SIZE);
        let die = DieSize::try_from(size).unwrap();
        let result = pick.index(size as usize) as u64 + 1;
        let outcome = RollOutcome::new(die, result).unwrap();
        prop_assert_eq!(outcome.tier(), Tier::Normal);
        prop_assert_eq!(evaluate(size).unwrap().tier(), Tier::Normal);
    }

    #[test]
    fn test_sizes_below_two_are_rejected(size in i64::MIN..2i64) {
        prop_assert_eq!(evaluate(size), Err(DiceError::InvalidArgument { die_size: size }));
    }
}

#[test]
fn test_d20_tiers_follow_result() {
    for result in 1..=20 {
        let outcome = RollOutcome::new(DieSize::D20, result).unwrap();
        let expected = match result {
            20 => Tier::CriticalSuccess,
            1 => Tier::CriticalFailure,
            _ => Tier::Normal,
        };
        assert_eq!(outcome.tier(), expected, "d20 result {result}");
        assert_eq!(outcome.tier().is_critical(), expected != Tier::Normal);
    }
}

#[test]
fn test_evaluate_d20_tier_consistent_with_result() {
    for _ in 0..2_000 {
        let outcome = evaluate(20).unwrap();
        assert_eq!(outcome.tier(), Tier::classify(DieSize::D20, outcome.result()));
    }
}

#[test]
fn test_d6_uniformity_smoke() {
    const DRAWS: usize = 120_000;
    let mut counts = [0usize; 6];
    for _ in 0..DRAWS {
        let outcome = evaluate(6).unwrap();
        counts[(outcome.result() - 1) as usize] += 1;
    }

    // Roughly nine standard deviations either side of 1/6.
    for (face, count) in counts.iter().enumerate() {
        let frequency = *count as f64 / DRAWS as f64;
        assert!(
            (frequency - 1.0 / 6.0).abs() < 0.01,
            "face {} came up with frequency {frequency}",
            face + 1
        );
    }
}

//! Die sizes, roll outcomes, and their classification.

use crate::error::{DiceError, DiceResult};
use rand::Rng;
use std::fmt;

/// Smallest die the bot will roll.
pub const MIN_DIE_SIZE: u64 = 2;

/// The only die size with critical results.
pub const CRITICAL_DIE_SIZE: u64 = 20;

/// Number of faces of a die, always at least [`MIN_DIE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieSize(u64);

impl DieSize {
    /// The twenty-sided die.
    pub const D20: Self = Self(CRITICAL_DIE_SIZE);

    /// Number of faces.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for DieSize {
    type Error = DiceError;

    fn try_from(die_size: i64) -> Result<Self, Self::Error> {
        match u64::try_from(die_size) {
            Ok(faces) if faces >= MIN_DIE_SIZE => Ok(Self(faces)),
            _ => Err(DiceError::InvalidArgument { die_size }),
        }
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

/// Presentation tier of a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Anything that is not a critical.
    Normal,
    /// A natural 20 on a d20.
    CriticalSuccess,
    /// A natural 1 on a d20.
    CriticalFailure,
}

impl Tier {
    /// Classifies `result` rolled on `die_size`.
    pub const fn classify(die_size: DieSize, result: u64) -> Self {
        if die_size.get() != CRITICAL_DIE_SIZE {
            return Self::Normal;
        }
        match result {
            CRITICAL_DIE_SIZE => Self::CriticalSuccess,
            1 => Self::CriticalFailure,
            _ => Self::Normal,
        }
    }

    /// Whether this tier gets the highlighted treatment.
    pub const fn is_critical(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

/// A single evaluated roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    die_size: DieSize,
    result: u64,
    tier: Tier,
}

impl RollOutcome {
    /// Builds the outcome of a known result.
    pub fn new(die_size: DieSize, result: u64) -> DiceResult<Self> {
        if !(1..=die_size.get()).contains(&result) {
            return Err(DiceError::ResultOutOfRange {
                die_size: die_size.get(),
                result,
            });
        }
        Ok(Self {
            die_size,
            result,
            tier: Tier::classify(die_size, result),
        })
    }

    /// Size of the rolled die.
    pub const fn die_size(&self) -> DieSize {
        self.die_size
    }

    /// The face that came up, in `1..=die_size`.
    pub const fn result(&self) -> u64 {
        self.result
    }

    /// Presentation tier.
    pub const fn tier(&self) -> Tier {
        self.tier
    }
}

/// Rolls a die of `die_size` faces with the thread-local RNG.
pub fn evaluate(die_size: i64) -> DiceResult<RollOutcome> {
    let die_size = DieSize::try_from(die_size)?;
    Ok(evaluate_with(die_size, &mut rand::rng()))
}

/// Rolls a die with a caller-supplied RNG.
pub fn evaluate_with<R: Rng + ?Sized>(die_size: DieSize, rng: &mut R) -> RollOutcome {
    let result = rng.random_range(1..=die_size.get());
    RollOutcome {
        die_size,
        result,
        tier: Tier::classify(die_size, result),
    }
}

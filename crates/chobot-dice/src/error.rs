//! Dice evaluation errors.

/// Errors produced while building a roll.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceError {
    /// The die has fewer than two faces.
    #[error("Invalid die size {die_size}: a die needs at least 2 faces")]
    InvalidArgument {
        /// The rejected size.
        die_size: i64,
    },

    /// A result that cannot come from the given die.
    #[error("Result {result} is out of range for a d{die_size}")]
    ResultOutOfRange {
        /// Size of the die.
        die_size: u64,
        /// The rejected result.
        result: u64,
    },
}

/// Result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

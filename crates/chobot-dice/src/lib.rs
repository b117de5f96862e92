//! # Chobot Dice
//!
//! Die roll evaluation for Chobot.
//!
//! A roll draws a uniformly distributed result from `1..=die_size` and
//! classifies it into a presentation [`Tier`]. Only the twenty-sided die has
//! critical results: a natural 20 is a critical success and a natural 1 a
//! critical failure.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod roll;

pub use error::*;
pub use roll::*;

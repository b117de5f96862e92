//! # Chobot
//!
//! El Chobot, a small Discord bot for command listing, server invites and
//! dice rolls.
//!
//! This is the main binary crate that wires configuration, logging and the
//! Poise framework into a running Discord client.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;

//! # Chobot Common
//!
//! Shared types, logging bootstrap, and test utilities for Chobot.
//!
//! This crate provides the foundational types used across all other crates
//! in the Chobot workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
pub use types::*;

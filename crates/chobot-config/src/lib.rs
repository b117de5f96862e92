//! # Chobot Config
//!
//! Type-safe startup configuration for Chobot.
//!
//! Settings come from an optional YAML file, then environment variables
//! (optionally seeded from an `ini.env` file) override individual fields.
//! The result is validated once before the bot connects.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use error::*;
pub use loader::*;
pub use schema::*;

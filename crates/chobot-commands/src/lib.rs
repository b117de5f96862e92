//! # Chobot Commands
//!
//! Discord command implementations using Poise framework for Chobot.
//!
//! This crate provides the `/comandos`, `/convite` and `/rolar` slash
//! commands, the embeds they reply with, and the relay channel watcher.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod comandos;
pub mod convite;
pub mod framework;
pub mod relay;
pub mod render;
pub mod rolar;

pub use catalog::*;
pub use framework::*;

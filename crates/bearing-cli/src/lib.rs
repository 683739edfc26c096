//! # bearing-cli
//!
//! Command-line front end for Bearing Finder.
//!
//! - Bearing lookup by `d D B` (first match or `--all`)
//! - Housing listing by inner diameter
//! - Config inspection (`config path`, `config show`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;

pub use error::{Error, Result};

//! Utility modules for path handling.
//!
//! # Modules
//!
//! - [`paths`]: Generic path utilities (tilde expansion)
//! - [`resolver`]: Config file and record store resolution

pub mod paths;
pub mod resolver;

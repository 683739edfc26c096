//! Bearing Core — record model, record store, and lookup.
//!
//! This crate holds everything needed to answer "which bearing has these
//! dimensions?" against a flat-file database. It has no CLI concerns.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: Record model, field aliases, dimension parsing
//! - [`store`]: Line and document access to the store file
//! - [`matcher`]: Field and fragment line matchers
//! - [`lookup`]: First-match and all-matches lookup
//! - [`util`]: Path utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod lookup;
pub mod matcher;
pub mod record;
pub mod store;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use lookup::{Lookup, LookupOptions, LookupOutcome, NOT_FOUND, find_model};
pub use matcher::{Hit, MatchMode, Query};
pub use record::{Language, parse_dimension};
pub use store::{DEFAULT_STORE_FILE, RecordStore, StoreFormat};

// Convenience re-exports from util
pub use util::resolver::PathResolver;

//! Record lookup over a [`RecordStore`].
//!
//! [`Lookup::first`] is the core operation: scan the store in order and stop
//! at the first matching record. [`Lookup::all`] keeps scanning and returns
//! every distinct match sorted by model.
//!
//! # Example
//!
//! ```no_run
//! use bearing_core::{Lookup, LookupOptions, Query, RecordStore, StoreFormat};
//!
//! let store = RecordStore::new("DataBase.json", StoreFormat::Lines);
//! let lookup = Lookup::new(LookupOptions::default());
//! match lookup.first(&store, &Query::bearing("10", "26", "8"))? {
//!     Some(hit) => println!("{}", hit.model),
//!     None => println!("Not Found"),
//! }
//! # Ok::<(), bearing_core::Error>(())
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::matcher::{FieldMatcher, FragmentMatcher, Hit, MatchMode, Query, RecordMatcher};
use crate::store::{RecordStore, StoreFormat};

/// Text printed when nothing matches.
pub const NOT_FOUND: &str = "Not Found";

/// Result of a single-model lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Model of the first matching record
    Found(String),
    /// No record matched
    NotFound,
}

impl LookupOutcome {
    /// Returns `true` if a model was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<Hit>> for LookupOutcome {
    fn from(hit: Option<Hit>) -> Self {
        match hit {
            Some(hit) => Self::Found(hit.model),
            None => Self::NotFound,
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(model) => write!(f, "{model}"),
            Self::NotFound => write!(f, "{NOT_FOUND}"),
        }
    }
}

/// Matching options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookupOptions {
    /// Matching strategy
    pub mode: MatchMode,
    /// Allowed absolute difference for [`MatchMode::Exact`]
    pub tolerance: f64,
}

/// Lookup engine.
#[derive(Clone, Debug, Default)]
pub struct Lookup {
    options: LookupOptions,
}

impl Lookup {
    /// Create a lookup with the given options.
    pub fn new(options: LookupOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    /// First matching record in store order, if any.
    pub fn first(&self, store: &RecordStore, query: &Query) -> Result<Option<Hit>> {
        log::debug!(
            "Looking up {query} in {} ({}, {})",
            store.path().display(),
            store.format(),
            self.options.mode
        );
        let mut hits = self.scan(store, query)?;
        hits.next().transpose()
    }

    /// Every distinct matching record, sorted by model.
    pub fn all(&self, store: &RecordStore, query: &Query) -> Result<Vec<Hit>> {
        let unique = self.scan(store, query)?.collect::<Result<BTreeSet<Hit>>>()?;
        log::debug!("{} distinct match(es) for {query}", unique.len());
        Ok(unique.into_iter().collect())
    }

    fn scan(
        &self,
        store: &RecordStore,
        query: &Query,
    ) -> Result<Box<dyn Iterator<Item = Result<Hit>>>> {
        match (store.format(), self.options.mode) {
            (StoreFormat::Lines, mode) => {
                let matcher: Box<dyn RecordMatcher> = match mode {
                    MatchMode::Exact => {
                        Box::new(FieldMatcher::new(query, self.options.tolerance)?)
                    }
                    MatchMode::Fragment => Box::new(FragmentMatcher::new(query)),
                };
                let lines = store.lines()?;
                Ok(Box::new(lines.filter_map(move |line| match line {
                    Ok(line) => matcher.match_line(&line.text).map(Ok),
                    Err(e) => Some(Err(e)),
                })))
            }
            (StoreFormat::Document, MatchMode::Exact) => {
                let matcher = FieldMatcher::new(query, self.options.tolerance)?;
                let objects = store.load_document(query.section())?;
                Ok(Box::new(
                    objects
                        .into_iter()
                        .filter_map(move |object| matcher.match_object(&object).map(Ok)),
                ))
            }
            (StoreFormat::Document, MatchMode::Fragment) => Err(Error::config(
                "fragment matching requires the 'lines' store format",
            )),
        }
    }
}

/// Find the model for `(inner, outer, width)` in a line store at `path`.
///
/// Uses exact field matching. A missing store is reported as
/// [`Error::StoreUnavailable`], not as [`LookupOutcome::NotFound`].
pub fn find_model(
    path: impl AsRef<Path>,
    inner: &str,
    outer: &str,
    width: &str,
) -> Result<LookupOutcome> {
    let store = RecordStore::new(path.as_ref(), StoreFormat::Lines);
    let hit = Lookup::default().first(&store, &Query::bearing(inner, outer, width))?;
    Ok(hit.into())
}

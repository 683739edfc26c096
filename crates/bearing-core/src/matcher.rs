//! Line matchers.
//!
//! A [`RecordMatcher`] decides whether one store line satisfies a [`Query`]
//! and, if so, extracts the record's model. Two strategies exist:
//!
//! - [`FieldMatcher`] parses the line as JSON and compares numbers.
//! - [`FragmentMatcher`] looks for `"<label>": <value>` substrings, exactly
//!   as the store writes them. It is kept for databases that rely on the old
//!   textual behaviour (for example, matching `10` against `100`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{Description, Dimension, Object, Record, parse_dimension};
use crate::store::Section;

// ============================================================================
// Query
// ============================================================================

/// Dimensions to look up, as raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    section: Section,
    terms: Vec<(Dimension, String)>,
}

impl Query {
    /// Bearing lookup on all three dimensions.
    pub fn bearing(
        inner: impl Into<String>,
        outer: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        Self {
            section: Section::Bearings,
            terms: vec![
                (Dimension::Inner, inner.into()),
                (Dimension::Outer, outer.into()),
                (Dimension::Width, width.into()),
            ],
        }
    }

    /// Housing lookup on the inner diameter only.
    pub fn housing(inner: impl Into<String>) -> Self {
        Self {
            section: Section::Housings,
            terms: vec![(Dimension::Inner, inner.into())],
        }
    }

    /// Store section this query reads from document stores.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Query terms in command-line order.
    pub fn terms(&self) -> &[(Dimension, String)] {
        &self.terms
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .terms
            .iter()
            .map(|(d, v)| format!("{}={v}", d.symbol()))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

// ============================================================================
// MatchMode / Hit
// ============================================================================

/// How store lines are compared against a query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Parse each line and compare numeric fields.
    #[default]
    Exact,
    /// Substring containment of `"<label>": <value>` fragments.
    Fragment,
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "fragment" => Ok(Self::Fragment),
            other => Err(Error::config(format!(
                "Unknown match mode '{other}' (expected 'exact' or 'fragment')"
            ))),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// A matching record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hit {
    /// Model identifier
    pub model: String,
    /// Description, when the store has one
    pub description: Description,
}

impl Hit {
    /// Hit with no description.
    pub fn model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            description: Description::default(),
        }
    }
}

// ============================================================================
// RecordMatcher
// ============================================================================

/// Tests store lines against a query.
pub trait RecordMatcher {
    /// Returns the hit for `line`, or `None` if the line does not match.
    fn match_line(&self, line: &str) -> Option<Hit>;
}

/// Substring matcher reproducing the store's textual layout.
#[derive(Clone, Debug)]
pub struct FragmentMatcher {
    fragments: Vec<String>,
}

const MODEL_OPEN: &str = "\"model\": \"";

impl FragmentMatcher {
    /// Build the `"<label>": <value>` fragments for `query`.
    pub fn new(query: &Query) -> Self {
        let fragments = query
            .terms()
            .iter()
            .map(|(d, v)| format!("\"{}\": {v}", d.label()))
            .collect();
        Self { fragments }
    }

    /// The fragments a line must contain.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

impl RecordMatcher for FragmentMatcher {
    fn match_line(&self, line: &str) -> Option<Hit> {
        if !self.fragments.iter().all(|f| line.contains(f.as_str())) {
            return None;
        }
        match extract_model(line) {
            Some(model) => Some(Hit::model(model)),
            None => {
                log::warn!("Line matches but has no model field: {line}");
                None
            }
        }
    }
}

/// Text between `"model": "` and the next `"`.
///
/// An unterminated value runs to the end of the line.
pub fn extract_model(line: &str) -> Option<&str> {
    let start = line.find(MODEL_OPEN)? + MODEL_OPEN.len();
    let rest = &line[start..];
    let end = rest.find('"').unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Parsed-field matcher comparing numbers within a tolerance.
#[derive(Clone, Debug)]
pub struct FieldMatcher {
    terms: Vec<(Dimension, f64)>,
    tolerance: f64,
}

impl FieldMatcher {
    /// Parse the query's dimensions.
    ///
    /// Fails with [`Error::InvalidDimension`] if any term is not a number.
    pub fn new(query: &Query, tolerance: f64) -> Result<Self> {
        let terms = query
            .terms()
            .iter()
            .map(|(d, v)| {
                parse_dimension(v)
                    .map(|n| (*d, n))
                    .ok_or_else(|| Error::InvalidDimension {
                        dimension: d.label(),
                        value: v.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            terms,
            tolerance: tolerance.abs(),
        })
    }

    /// Returns the hit for an already parsed store object.
    pub fn match_object(&self, object: &Object) -> Option<Hit> {
        let record = Record::from_object(object);
        let matches = self.terms.iter().all(|(d, want)| {
            record
                .dimension(*d)
                .is_some_and(|have| (have - want).abs() <= self.tolerance)
        });
        if !matches {
            return None;
        }
        match record.model {
            Some(model) => Some(Hit {
                model,
                description: record.description,
            }),
            None => {
                log::warn!("Record matches but has no model field");
                None
            }
        }
    }
}

impl RecordMatcher for FieldMatcher {
    fn match_line(&self, line: &str) -> Option<Hit> {
        let body = line.trim().trim_end_matches(',').trim_end();
        if !(body.starts_with('{') && body.ends_with('}')) {
            return None;
        }
        match serde_json::from_str::<Object>(body) {
            Ok(object) => self.match_object(&object),
            Err(e) => {
                log::debug!("Skipping unparseable line: {e}");
                None
            }
        }
    }
}

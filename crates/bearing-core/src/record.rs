//! Record model for the bearing database.
//!
//! A store line is a loose JSON object. Field names vary between databases
//! (`d` vs `inner_diameter`, `B` vs `width`), and numbers may be written as
//! JSON numbers, plain strings, or strings using Persian digits. This module
//! turns such an object into a [`Record`] with parsed dimensions.
//!
//! # Example
//!
//! ```
//! use bearing_core::record::{Dimension, Record};
//!
//! let object = serde_json::from_str(
//!     r#"{"d": "۱۰", "outer_diameter": 26, "B": 8, "model": "608"}"#,
//! ).unwrap();
//! let record = Record::from_object(&object);
//!
//! assert_eq!(record.dimension(Dimension::Inner), Some(10.0));
//! assert_eq!(record.dimension(Dimension::Outer), Some(26.0));
//! assert_eq!(record.model.as_deref(), Some("608"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A single JSON object from the store.
pub type Object = Map<String, Value>;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?[0-9]*\.?[0-9]+").expect("Invalid number regex"));

// ============================================================================
// Dimension
// ============================================================================

/// One of the three bearing dimensions used as a lookup key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Inner diameter (`d`).
    Inner,
    /// Outer diameter (`D`).
    Outer,
    /// Width (`B`).
    Width,
}

impl Dimension {
    /// All dimensions in command-line order.
    pub const ALL: [Dimension; 3] = [Dimension::Inner, Dimension::Outer, Dimension::Width];

    /// Canonical field label used by the store.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inner => "inner_diameter",
            Self::Outer => "outer_diameter",
            Self::Width => "width",
        }
    }

    /// Engineering symbol for the dimension.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inner => "d",
            Self::Outer => "D",
            Self::Width => "B",
        }
    }

    // Case-sensitive keys, checked first so that `d` and `D` never collide.
    fn exact_keys(self) -> &'static [&'static str] {
        match self {
            Self::Inner => &["d", "inner_diameter"],
            Self::Outer => &["D", "outer_diameter"],
            Self::Width => &["B", "b", "width"],
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Inner => &["inner_diameter", "inner", "di", "id", "innerdiameter"],
            Self::Outer => &[
                "outer_diameter",
                "outer",
                "od",
                "douter",
                "outerdiameter",
                "de",
            ],
            Self::Width => &["width", "w"],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Language / Description
// ============================================================================

/// Language used when choosing a record description.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Persian
    Fa,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fa" => Ok(Self::Fa),
            other => Err(Error::config(format!(
                "Unknown language '{other}' (expected 'en' or 'fa')"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Fa => write!(f, "fa"),
        }
    }
}

/// Free-text description attached to a record, per language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Description {
    /// Persian text (`purpose`, `description`, `special_features`)
    pub fa: Option<String>,
    /// English text (`purpose_en`, `description_en`, `special_features_en`)
    pub en: Option<String>,
}

impl Description {
    fn from_object(object: &Object) -> Self {
        let fa = get_by_keys(
            object,
            &["purpose", "description", "special_features"],
            &["purpose", "description", "specialfeatures"],
        )
        .and_then(value_text);
        let en = get_by_keys(
            object,
            &["purpose_en", "description_en", "special_features_en"],
            &["purposeen", "descriptionen", "specialfeaturesen"],
        )
        .and_then(value_text);
        Self { fa, en }
    }

    /// Text in `language`, falling back to the other language.
    pub fn for_language(&self, language: Language) -> Option<&str> {
        let (primary, fallback) = match language {
            Language::En => (&self.en, &self.fa),
            Language::Fa => (&self.fa, &self.en),
        };
        primary.as_deref().or(fallback.as_deref())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Parsed view of one store object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    /// Inner diameter, if present and numeric
    pub inner_diameter: Option<f64>,
    /// Outer diameter, if present and numeric
    pub outer_diameter: Option<f64>,
    /// Width, if present and numeric
    pub width: Option<f64>,
    /// Model identifier
    pub model: Option<String>,
    /// Optional description text
    pub description: Description,
}

impl Record {
    /// Build a record from a JSON object, resolving field aliases.
    pub fn from_object(object: &Object) -> Self {
        let dim = |d: Dimension| {
            get_by_keys(object, d.exact_keys(), d.aliases()).and_then(value_number)
        };
        Self {
            inner_diameter: dim(Dimension::Inner),
            outer_diameter: dim(Dimension::Outer),
            width: dim(Dimension::Width),
            model: get_by_keys(object, &["model", "Model"], &["model"]).and_then(value_text),
            description: Description::from_object(object),
        }
    }

    /// Value of a single dimension.
    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Inner => self.inner_diameter,
            Dimension::Outer => self.outer_diameter,
            Dimension::Width => self.width,
        }
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Parse a dimension written by a person or by a loosely typed database.
///
/// Persian and Arabic-Indic digits are mapped to ASCII, `,`, `٫` and `٬`
/// are read as decimal points, and the first number in the text wins.
///
/// # Examples
///
/// ```
/// use bearing_core::record::parse_dimension;
///
/// assert_eq!(parse_dimension("10"), Some(10.0));
/// assert_eq!(parse_dimension(" 12,5 mm "), Some(12.5));
/// assert_eq!(parse_dimension("۲۶"), Some(26.0));
/// assert_eq!(parse_dimension("abc"), None);
/// ```
pub fn parse_dimension(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let normalized: String = text.chars().map(normalize_char).collect();
    NUMBER_RE
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn normalize_char(c: char) -> char {
    match c {
        '\u{06F0}'..='\u{06F9}' => shift_digit(c, 0x06F0),
        '\u{0660}'..='\u{0669}' => shift_digit(c, 0x0660),
        '\u{066B}' | '\u{066C}' | ',' => '.',
        _ => c,
    }
}

fn shift_digit(c: char, zero: u32) -> char {
    char::from_digit(c as u32 - zero, 10).unwrap_or(c)
}

/// Lowercase and drop everything that is not an ASCII letter or digit.
pub fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Look up a field by exact key first, then by normalized alias.
///
/// Null values are treated as absent.
pub fn get_by_keys<'a>(object: &'a Object, exact: &[&str], aliases: &[&str]) -> Option<&'a Value> {
    for key in exact {
        if let Some(value) = object.get(*key).filter(|v| !v.is_null()) {
            return Some(value);
        }
    }

    let wanted: Vec<String> = aliases.iter().map(|a| normalize_key(a)).collect();
    object
        .iter()
        .filter(|(_, v)| !v.is_null())
        .find(|(k, _)| wanted.contains(&normalize_key(k)))
        .map(|(_, v)| v)
}

fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_dimension(s),
        _ => None,
    }
}

fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

//! Read-only access to the record store file.
//!
//! The store is opened once per lookup and released when the returned
//! iterator (or the loaded document) is dropped. Two layouts are accepted:
//!
//! - [`StoreFormat::Lines`]: one JSON object per line, scanned lazily.
//! - [`StoreFormat::Document`]: a whole JSON document, either an array of
//!   records or an object holding `bearings` / `housings` arrays.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::Object;

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "DataBase.json";

/// On-disk layout of the record store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreFormat {
    /// One record per line.
    #[default]
    Lines,
    /// A single JSON document.
    Document,
}

impl FromStr for StoreFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lines" => Ok(Self::Lines),
            "document" => Ok(Self::Document),
            other => Err(Error::config(format!(
                "Unknown store format '{other}' (expected 'lines' or 'document')"
            ))),
        }
    }
}

impl fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines => write!(f, "lines"),
            Self::Document => write!(f, "document"),
        }
    }
}

/// Which part of a document store a query reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Rolling bearings (`bearings` key)
    Bearings,
    /// Bearing housings (`housings` key)
    Housings,
}

impl Section {
    /// Key of the section inside a document store.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bearings => "bearings",
            Self::Housings => "housings",
        }
    }
}

/// One line read from a line store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreLine {
    /// 1-based line number
    pub number: usize,
    /// Line text without the trailing newline
    pub text: String,
}

/// Handle on a record store file.
#[derive(Clone, Debug)]
pub struct RecordStore {
    path: PathBuf,
    format: StoreFormat,
}

impl RecordStore {
    /// Create a handle; the file is not touched until it is read.
    pub fn new(path: impl Into<PathBuf>, format: StoreFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Layout of the store file.
    pub fn format(&self) -> StoreFormat {
        self.format
    }

    /// Open the store and iterate over its lines.
    ///
    /// Invalid UTF-8 is replaced rather than rejected so that one bad byte
    /// does not hide the rest of the store.
    pub fn lines(&self) -> Result<Lines> {
        let file = File::open(&self.path).map_err(|e| Error::store_unavailable(e, &self.path))?;
        log::debug!("Opened record store {}", self.path.display());
        Ok(Lines {
            reader: BufReader::new(file),
            path: self.path.clone(),
            number: 0,
            buf: Vec::new(),
        })
    }

    /// Load the records of `section` from a document store.
    ///
    /// An array document is returned whole. An object document yields the
    /// section's array, or else its first array value. Anything else is
    /// treated as empty.
    pub fn load_document(&self, section: Section) -> Result<Vec<Object>> {
        let file = File::open(&self.path).map_err(|e| Error::store_unavailable(e, &self.path))?;
        let document: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            Error::MalformedStore {
                path: self.path.clone(),
                source: e,
            }
        })?;

        let items = match document {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove(section.key()) {
                Some(Value::Array(items)) if !items.is_empty() => items,
                _ => map
                    .into_iter()
                    .find_map(|(_, v)| match v {
                        Value::Array(items) => Some(items),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            _ => Vec::new(),
        };

        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(object) => Some(object),
                _ => None,
            })
            .collect())
    }
}

/// Lazy, forward-only iterator over the lines of a store.
///
/// Owns the open file; dropping the iterator closes it.
pub struct Lines {
    reader: BufReader<File>,
    path: PathBuf,
    number: usize,
    buf: Vec<u8>,
}

impl Iterator for Lines {
    type Item = Result<StoreLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.number += 1;
                let mut text = String::from_utf8_lossy(&self.buf).into_owned();
                let trimmed = text.trim_end_matches(['\n', '\r']).len();
                text.truncate(trimmed);
                Some(Ok(StoreLine {
                    number: self.number,
                    text,
                }))
            }
            Err(e) => Some(Err(Error::io_with_path(e, &self.path))),
        }
    }
}

//! Shared fixtures for bearing-core integration tests.

use std::path::PathBuf;

use bearing_core::{RecordStore, StoreFormat};
use tempfile::TempDir;

/// A test record: (d, D, B, model).
pub type Row = (u32, u32, u32, String);

/// Render one store line exactly as the database writes it.
pub fn line(d: u32, outer: u32, b: u32, model: &str) -> String {
    format!(
        r#"{{"inner_diameter": {d}, "outer_diameter": {outer}, "width": {b}, "model": "{model}"}}"#
    )
}

/// Temporary line store. Keep the harness alive while the store is used.
pub struct StoreHarness {
    _dir: TempDir,
    pub path: PathBuf,
}

impl StoreHarness {
    pub fn with_content(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("DataBase.json");
        std::fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn with_rows(rows: &[Row]) -> Self {
        let content: String = rows
            .iter()
            .map(|(d, outer, b, model)| line(*d, *outer, *b, model) + "\n")
            .collect();
        Self::with_content(&content)
    }

    pub fn store(&self, format: StoreFormat) -> RecordStore {
        RecordStore::new(&self.path, format)
    }
}

//! Configuration for the bearing-finder CLI.
//!
//! Settings come from a TOML file, then environment variables, then
//! command-line flags (highest precedence). A missing config file is not an
//! error; defaults are used.
//!
//! ```toml
//! database = "~/bearings/DataBase.json"
//! format = "lines"
//! match_mode = "exact"
//! tolerance = 0.0
//! language = "en"
//! strict = false
//!
//! [logging]
//! level = "warn"
//! ```

use std::path::PathBuf;

use bearing_core::util::resolver::PathResolver;
use bearing_core::{Language, MatchMode, StoreFormat};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name used for the config directory and environment prefix.
pub const PROJECT_NAME: &str = "bearing-finder";

/// Path resolver for this project.
pub fn resolver() -> PathResolver {
    PathResolver::new(PROJECT_NAME)
}

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// CLI configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Record store path (tilde expanded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Store layout
    pub format: StoreFormat,
    /// Matching strategy
    pub match_mode: MatchMode,
    /// Allowed difference per dimension in exact mode
    pub tolerance: f64,
    /// Description language for listings
    pub language: Language,
    /// Report lookup errors instead of printing "Not Found"
    pub strict: bool,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl FinderConfig {
    /// Config file path: `explicit` if given, else the resolved location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => resolver().config_file(),
        }
    }

    /// Load the config file (if any), then apply environment overrides.
    ///
    /// A missing default file yields defaults; a missing `explicit` file is
    /// an error.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                Self::from_toml_str(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?
            }
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Override fields from `BEARING_FINDER_*` variables returned by `env`.
    pub fn apply_env<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolver = resolver();
        let var = |suffix: &str| {
            let name = resolver.env_var(suffix);
            env(&name)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name, v))
        };

        if let Some((_, v)) = var("DATABASE") {
            self.database = Some(v);
        }
        if let Some((_, v)) = var("FORMAT") {
            self.format = v.parse()?;
        }
        if let Some((_, v)) = var("MATCH_MODE") {
            self.match_mode = v.parse()?;
        }
        if let Some((name, v)) = var("TOLERANCE") {
            self.tolerance = v
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("{name} must be a number, got '{v}'")))?;
        }
        if let Some((_, v)) = var("LANGUAGE") {
            self.language = v.parse()?;
        }
        if let Some((name, v)) = var("STRICT") {
            self.strict = parse_bool(&v)
                .ok_or_else(|| Error::config(format!("{name} must be true or false, got '{v}'")))?;
        }
        if let Some((_, v)) = var("LOG_LEVEL") {
            self.logging.level = v;
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! Configurable path resolver for the config file and the record store.
//!
//! `PathResolver` locates files using environment variables, configured
//! values, and platform defaults.
//!
//! # Example
//!
//! ```no_run
//! use bearing_core::util::resolver::PathResolver;
//!
//! let resolver = PathResolver::new("bearing-finder");
//!
//! // Checks BEARING_FINDER_CONFIG, then the platform config directory
//! if let Some(config) = resolver.config_file() {
//!     println!("Config: {:?}", config);
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::store::DEFAULT_STORE_FILE;
use crate::util::paths::expand_tilde;

type EnvSource = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Configurable path resolver for a specific project.
#[derive(Clone)]
pub struct PathResolver {
    /// Project name (e.g., "bearing-finder")
    project_name: String,
    /// Environment variable prefix (e.g., "BEARING_FINDER")
    env_prefix: String,
    /// Environment lookup, `std::env::var` unless overridden
    env: EnvSource,
}

impl PathResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The project name is converted to an environment variable prefix:
    /// - "bearing-finder" → "BEARING_FINDER"
    /// - "my_project" → "MY_PROJECT"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            project_name: project_name.to_string(),
            env_prefix,
            env: Arc::new(|key| std::env::var(key).ok()),
        }
    }

    /// Replace the environment lookup.
    pub fn with_env<F>(mut self, env: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env = Arc::new(env);
        self
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// # Example
    /// ```
    /// use bearing_core::util::resolver::PathResolver;
    ///
    /// let resolver = PathResolver::new("bearing-finder");
    /// assert_eq!(resolver.env_var("DATABASE"), "BEARING_FINDER_DATABASE");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    fn env_path(&self, suffix: &str) -> Option<PathBuf> {
        (self.env)(&self.env_var(suffix))
            .filter(|v| !v.trim().is_empty())
            .map(|v| expand_tilde(&v))
    }

    /// Resolve the config file path.
    ///
    /// Checks in order:
    /// 1. `{PROJECT}_CONFIG` environment variable
    /// 2. `<platform config dir>/{project}/config.toml`
    ///
    /// The file itself need not exist.
    pub fn config_file(&self) -> Option<PathBuf> {
        if let Some(path) = self.env_path("CONFIG") {
            return Some(path);
        }
        dirs::config_dir().map(|dir| dir.join(&self.project_name).join("config.toml"))
    }

    /// Resolve the record store path.
    ///
    /// Checks in order:
    /// 1. `explicit` (command-line flag)
    /// 2. `{PROJECT}_DATABASE` environment variable
    /// 3. `configured` (config file value)
    /// 4. `DataBase.json` relative to the working directory
    ///
    /// The fallback is returned whether or not the file exists; a missing
    /// store surfaces when it is opened.
    pub fn store_path(&self, explicit: Option<&Path>, configured: Option<&str>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = self.env_path("DATABASE") {
            return path;
        }
        if let Some(path) = configured.filter(|p| !p.trim().is_empty()) {
            return expand_tilde(path);
        }
        PathBuf::from(DEFAULT_STORE_FILE)
    }

    /// Get the project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get the environment variable prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("project_name", &self.project_name)
            .field("env_prefix", &self.env_prefix)
            .finish_non_exhaustive()
    }
}

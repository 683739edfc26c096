//! Handlers for the `config` subcommands.
//!
//! `config path` shows where settings are read from; `config show` shows what
//! a lookup would actually use after the file and `BEARING_FINDER_*`
//! overrides are merged, including the record store it resolves to.

use std::io::Write;
use std::path::Path;

use bearing_core::util::resolver::PathResolver;

use crate::cli::ConfigAction;
use crate::config::FinderConfig;
use crate::error::{Error, Result};

/// Run a config subcommand, writing its report to `out`.
pub fn handle_config_command<W: Write>(
    explicit: Option<&str>,
    action: ConfigAction,
    config: &FinderConfig,
    resolver: &PathResolver,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Path => write_config_path(explicit, out),
        ConfigAction::Show => write_effective_settings(config, resolver, out),
    }
}

/// Print the config file location.
pub fn write_config_path<W: Write>(explicit: Option<&str>, out: &mut W) -> Result<()> {
    let path = FinderConfig::resolve_config_path(explicit)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        eprintln!("(file does not exist; built-in defaults apply)");
    }
    Ok(())
}

/// Print the merged settings as TOML, headed by the store they select.
pub fn write_effective_settings<W: Write>(
    config: &FinderConfig,
    resolver: &PathResolver,
    out: &mut W,
) -> Result<()> {
    let store = resolver.store_path(None, config.database.as_deref());
    writeln!(out, "# store: {} ({})", store.display(), store_state(&store))?;
    write!(out, "{}", config.to_toml_string()?)?;
    out.flush()?;
    Ok(())
}

fn store_state(path: &Path) -> &'static str {
    if path.is_file() {
        "present"
    } else if path.exists() {
        "not a file"
    } else {
        "missing"
    }
}

//! Command-line argument definitions.

use std::path::PathBuf;

use bearing_core::{Language, MatchMode, StoreFormat};
use clap::{ArgAction, Args, Parser, Subcommand};

/// Bearing Finder - look up a bearing model by its dimensions
#[derive(Parser, Debug)]
#[command(name = "bearing-finder", version)]
#[command(
    about = "Find a bearing model by inner diameter, outer diameter and width",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub lookup: LookupArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Positional dimensions for the default bearing lookup.
#[derive(Args, Debug, Clone, Default)]
pub struct LookupArgs {
    /// Inner diameter (d)
    #[arg(value_name = "d", allow_negative_numbers = true)]
    pub inner: Option<String>,

    /// Outer diameter (D)
    #[arg(value_name = "D", allow_negative_numbers = true)]
    pub outer: Option<String>,

    /// Width (B)
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub width: Option<String>,

    /// Print every matching model instead of the first
    #[arg(long)]
    pub all: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Options shared by every lookup.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Record store path
    #[arg(long = "db", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Store layout: lines or document
    #[arg(long)]
    pub format: Option<StoreFormat>,

    /// Matching strategy: exact or fragment
    #[arg(long)]
    pub match_mode: Option<MatchMode>,

    /// Allowed difference per dimension in exact mode
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Description language for listings: en or fa
    #[arg(long = "lang")]
    pub language: Option<Language>,

    /// Fail on missing stores and invalid input instead of printing "Not Found"
    #[arg(long)]
    pub strict: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List housings by inner diameter
    Housing {
        /// Inner diameter (d)
        #[arg(value_name = "d", allow_negative_numbers = true)]
        inner: Option<String>,

        #[command(flatten)]
        store: StoreArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Show the effective settings and the store they resolve to
    Show,
}

impl Cli {
    /// Whether an unusable config file or environment override may be
    /// replaced by defaults instead of failing the run.
    ///
    /// Lookups tolerate it unless `--strict` or an explicit `--config` was
    /// given. `config show` never does, since reporting the settings is its
    /// whole job.
    pub fn tolerates_config_errors(&self) -> bool {
        if self.config.is_some() {
            return false;
        }
        match &self.command {
            None => !self.lookup.store.strict,
            Some(Command::Housing { store, .. }) => !store.strict,
            Some(Command::Config { action }) => *action == ConfigAction::Path,
        }
    }
}

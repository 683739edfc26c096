//! Lookup commands and exit status handling.
//!
//! Stdout carries only the lookup result: the model (no trailing newline),
//! a listing for `--all` / `housing`, or `Not Found`. Diagnostics go to the
//! log on stderr.

use std::io::Write;
use std::process::ExitCode;

use bearing_core::util::resolver::PathResolver;
use bearing_core::{
    Hit, Language, Lookup, LookupOptions, LookupOutcome, NOT_FOUND, Query, RecordStore,
};

use crate::cli::{Cli, Command, LookupArgs, StoreArgs};
use crate::config::FinderConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;

/// Process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Lookup ran; found and not found alike.
    Success,
    /// Missing positional arguments.
    Usage,
    /// Error reported on stderr.
    Failure,
}

impl Status {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Usage => 1,
            Self::Failure => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Effective lookup settings after merging config and flags.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Store to read
    pub store: RecordStore,
    /// Matching options
    pub options: LookupOptions,
    /// Description language for listings
    pub language: Language,
    /// Report errors instead of printing "Not Found"
    pub strict: bool,
}

impl Settings {
    /// Merge `args` over `config`, resolving the store path with `resolver`.
    pub fn resolve(config: &FinderConfig, args: &StoreArgs, resolver: &PathResolver) -> Self {
        let path = resolver.store_path(args.database.as_deref(), config.database.as_deref());
        let format = args.format.unwrap_or(config.format);
        Self {
            store: RecordStore::new(path, format),
            options: LookupOptions {
                mode: args.match_mode.unwrap_or(config.match_mode),
                tolerance: args.tolerance.unwrap_or(config.tolerance),
            },
            language: args.language.unwrap_or(config.language),
            strict: args.strict || config.strict,
        }
    }
}

/// Run the parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: Cli, config: &FinderConfig, out: &mut W) -> Result<Status> {
    let resolver = crate::config::resolver();
    match cli.command {
        Some(Command::Config { action }) => {
            handle_config_command(cli.config.as_deref(), action, config, &resolver, out)?;
            Ok(Status::Success)
        }
        Some(Command::Housing { inner, store }) => {
            let Some(inner) = inner else {
                tracing::debug!("housing lookup needs an inner diameter");
                return Ok(Status::Usage);
            };
            let settings = Settings::resolve(config, &store, &resolver);
            list_matches(&settings, &Query::housing(inner), out)
        }
        None => {
            let LookupArgs {
                inner,
                outer,
                width,
                all,
                store,
            } = cli.lookup;
            let (Some(inner), Some(outer), Some(width)) = (inner, outer, width) else {
                tracing::debug!("bearing lookup needs d, D and B");
                return Ok(Status::Usage);
            };
            let settings = Settings::resolve(config, &store, &resolver);
            let query = Query::bearing(inner, outer, width);
            if all {
                list_matches(&settings, &query, out)
            } else {
                print_first_match(&settings, &query, out)
            }
        }
    }
}

/// Print the model of the first match, or `Not Found`.
pub fn print_first_match<W: Write>(
    settings: &Settings,
    query: &Query,
    out: &mut W,
) -> Result<Status> {
    let lookup = Lookup::new(settings.options);
    let outcome = match lookup.first(&settings.store, query) {
        Ok(hit) => LookupOutcome::from(hit),
        Err(e) => absorb(settings, e).map(|()| LookupOutcome::NotFound)?,
    };
    tracing::info!(%query, found = outcome.is_found(), "lookup finished");
    write!(out, "{outcome}")?;
    out.flush()?;
    Ok(Status::Success)
}

/// Print every distinct match, one per line, or `Not Found`.
pub fn list_matches<W: Write>(
    settings: &Settings,
    query: &Query,
    out: &mut W,
) -> Result<Status> {
    let lookup = Lookup::new(settings.options);
    let hits = match lookup.all(&settings.store, query) {
        Ok(hits) => hits,
        Err(e) => absorb(settings, e).map(|()| Vec::new())?,
    };
    tracing::info!(%query, matches = hits.len(), "listing finished");

    if hits.is_empty() {
        write!(out, "{NOT_FOUND}")?;
    } else {
        for hit in &hits {
            writeln!(out, "{}", format_hit(hit, settings.language))?;
        }
    }
    out.flush()?;
    Ok(Status::Success)
}

/// `model`, or `model<TAB>description` when the record has one.
pub fn format_hit(hit: &Hit, language: Language) -> String {
    match hit.description.for_language(language) {
        Some(text) => format!("{}\t{text}", hit.model),
        None => hit.model.clone(),
    }
}

// Store and input errors read as "Not Found" unless strict.
fn absorb(settings: &Settings, err: bearing_core::Error) -> Result<()> {
    if !settings.strict && (err.is_store_error() || err.is_input_error()) {
        tracing::warn!(error = %err, "lookup failed; reporting Not Found");
        Ok(())
    } else {
        Err(err.into())
    }
}

//! Bearing Finder CLI
//!
//! Prints the model of the bearing matching `d D B`, or `Not Found`.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::process::ExitCode;

use bearing_cli::cli::Cli;
use bearing_cli::commands::{self, Status};
use bearing_cli::config::FinderConfig;
use bearing_cli::logging;
use clap::Parser;
use clap::error::ErrorKind;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return Status::Success.into();
        }
        Err(e) => {
            let _ = e.print();
            return Status::Usage.into();
        }
    };

    let (config, ignored) = match FinderConfig::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) if cli.tolerates_config_errors() => (FinderConfig::default(), Some(e)),
        Err(e) => {
            logging::init(cli.verbose, "warn");
            report(&anyhow::Error::new(e));
            return Status::Failure.into();
        }
    };
    logging::init(cli.verbose, &config.logging.level);
    if let Some(e) = ignored {
        tracing::warn!(error = %e, "ignoring unusable configuration; using defaults");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match commands::run(cli, &config, &mut out) {
        Ok(status) => status.into(),
        Err(e) => {
            let _ = out.flush();
            report(&anyhow::Error::new(e));
            Status::Failure.into()
        }
    }
}

fn report(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");
}

//! Tracing subscriber setup.
//!
//! Logs always go to stderr; stdout is reserved for lookup results.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given verbosity, falling back to `configured`.
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` wins over everything else.
pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(filter_directive(verbose, configured))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

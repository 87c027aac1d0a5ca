//! Structured logging setup
//!
//! Events are written to stderr so report output on stdout stays pipeable.

use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "pccat=error"
    } else if verbose {
        "pccat=debug"
    } else {
        "pccat=warn"
    }
}

/// Initialize structured logging; `RUST_LOG` overrides the flags
pub fn init_logging(verbose: bool, quiet: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(console::Term::stderr().features().colors_supported())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| miette::miette!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Verbose logging enabled");
    Ok(())
}

//! # Logging
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence;
//! otherwise the configured level applies to every target.
//!
//! Log lines go to stderr. Stdout belongs to whatever the process emits as
//! its result (e.g. `schemagen` schema output).

use crate::config::{HandlerConfig, LogFormat};
use anyhow::{anyhow, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &HandlerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter_directive()))
}

/// Subscriber for `config`, writing through `writer`
pub(crate) fn build_subscriber<W>(
    config: &HandlerConfig,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(writer);

    match config.log_format {
        LogFormat::Json => Box::new(builder.json().with_current_span(true).finish()),
        LogFormat::Text => Box::new(builder.with_ansi(config.log_enable_color).finish()),
    }
}

/// Initialise structured logging on stderr
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed. Callers that
/// may run after another component set one up can log and continue.
pub fn init_tracing(config: &HandlerConfig) -> Result<()> {
    tracing::subscriber::set_global_default(build_subscriber(config, std::io::stderr))
        .map_err(|e| anyhow!("Tracing subscriber already initialized: {e}"))
}

//! # Observability
//!
//! - `logging`: tracing subscriber setup
//! - `metrics`: Prometheus counters for handler outcomes and stabilization

use crate::config::HandlerConfig;
use anyhow::Result;
use tracing::warn;

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::{register_metrics, render};

/// Install logging and, when enabled, register metrics
///
/// An already-installed subscriber is not an error here; the host process
/// may have set one up first.
///
/// # Errors
///
/// Returns an error if metric registration fails.
pub fn init(config: &HandlerConfig) -> Result<()> {
    if let Err(e) = init_tracing(config) {
        warn!("{e}");
    }
    if config.enable_metrics {
        register_metrics()?;
    }
    Ok(())
}

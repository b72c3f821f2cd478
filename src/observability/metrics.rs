//! # Metrics
//!
//! Prometheus metrics for the resource handlers.
//!
//! ## Metrics Exposed
//!
//! - `cleanrooms_handler_invocations_total` - Handler invocations by resource type, action and status
//! - `cleanrooms_stabilization_checks_total` - Stabilization attempts by resource type and verdict
//! - `cleanrooms_control_plane_errors_total` - Control-plane errors by resource type and operation
//!
//! Counters record whether or not they are registered; registration only
//! makes them visible to [`render`].

use anyhow::{Context, Result};
use prometheus::core::Collector;
use prometheus::{Encoder, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static HANDLER_INVOCATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "cleanrooms_handler_invocations_total",
            "Total number of handler invocations by resource type, action and status",
        ),
        &["resource_type", "action", "status"],
    )
    .expect("Failed to create HANDLER_INVOCATIONS_TOTAL metric - this should never happen")
});

static STABILIZATION_CHECKS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "cleanrooms_stabilization_checks_total",
            "Total number of stabilization checks by resource type and verdict",
        ),
        &["resource_type", "verdict"],
    )
    .expect("Failed to create STABILIZATION_CHECKS_TOTAL metric - this should never happen")
});

static CONTROL_PLANE_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "cleanrooms_control_plane_errors_total",
            "Total number of control-plane errors by resource type and operation",
        ),
        &["resource_type", "operation"],
    )
    .expect("Failed to create CONTROL_PLANE_ERRORS_TOTAL metric - this should never happen")
});

/// Register a collector, treating a repeat registration as success
fn register<C>(collector: C) -> Result<()>
where
    C: Collector + 'static,
{
    match REGISTRY.register(Box::new(collector)) {
        Ok(()) | Err(prometheus::Error::AlreadyReg) => Ok(()),
        Err(e) => Err(e).context("Failed to register metric"),
    }
}

/// Register all handler metrics with the crate registry
///
/// # Errors
///
/// Returns an error if a metric descriptor is rejected by the registry.
pub fn register_metrics() -> Result<()> {
    register(HANDLER_INVOCATIONS_TOTAL.clone())?;
    register(STABILIZATION_CHECKS_TOTAL.clone())?;
    register(CONTROL_PLANE_ERRORS_TOTAL.clone())?;
    Ok(())
}

/// Text exposition of every registered metric
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn render() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .context("Failed to encode metrics")?;
    String::from_utf8(buffer).context("Metrics exposition was not valid UTF-8")
}

pub fn record_handler_outcome(resource_type: &str, action: &str, status: &str) {
    HANDLER_INVOCATIONS_TOTAL
        .with_label_values(&[resource_type, action, status])
        .inc();
}

pub fn record_stabilization_check(resource_type: &str, verdict: &str) {
    STABILIZATION_CHECKS_TOTAL
        .with_label_values(&[resource_type, verdict])
        .inc();
}

pub fn increment_control_plane_errors(resource_type: &str, operation: &str) {
    CONTROL_PLANE_ERRORS_TOTAL
        .with_label_values(&[resource_type, operation])
        .inc();
}

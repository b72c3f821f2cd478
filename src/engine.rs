//! # Stabilization Engine
//!
//! Bounded-retry state machine that drives a create or delete from "API call
//! issued" to "provably converged" against an eventually consistent control
//! plane. Each framework invocation performs exactly one transition:
//!
//! ```text
//! Fresh ──mutation ok──▶ Pending(MAX_RETRIES) ──▶ Pending(n-1) ──▶ … ──▶ Converged
//!                                    │                                 └▶ Exhausted (NotStabilized)
//! ```
//!
//! Convergence requires agreement between the point lookup and the list scan.
//! The verdict of one attempt is a plain value ([`StabilizationVerdict`]) so the
//! retry-or-finish decision never depends on where an error was caught.

use crate::context::CallbackContext;
use crate::error::ApiError;
use crate::identity::ResourceIdentity;
use crate::observability::metrics;
use crate::provider::ControlPlane;
use crate::resources::ResourceModel;
use crate::scanner::resource_exists_in_listing;
use tracing::{debug, info, warn};

/// State the resource must reach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Create: readable by id and present in the listing
    Present,
    /// Delete: not found by id and absent from the listing
    Absent,
}

/// Outcome of one stabilization attempt
#[derive(Debug, Clone, PartialEq)]
pub enum StabilizationVerdict<M> {
    /// Both read paths agree. Carries the hydrated model for `Present`.
    Converged(Option<M>),
    NotYetConverged,
    /// A read failed with something other than the expected not-found.
    /// Retried exactly like `NotYetConverged`, only logged louder.
    Indeterminate(ApiError),
}

impl<M> StabilizationVerdict<M> {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StabilizationVerdict::Converged(_) => "converged",
            StabilizationVerdict::NotYetConverged => "not_yet_converged",
            StabilizationVerdict::Indeterminate(_) => "indeterminate",
        }
    }
}

/// Where a reconciliation stands, derived from the replayed context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No context, or the mutating call was never confirmed
    Fresh,
    Pending(CallbackContext),
}

impl Phase {
    #[must_use]
    pub fn of(context: Option<CallbackContext>) -> Self {
        match context {
            Some(ctx) if ctx.pending_stabilization => Phase::Pending(ctx),
            _ => Phase::Fresh,
        }
    }
}

/// What a pending invocation resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<M> {
    Converged(Option<M>),
    /// Not there yet; hand this context back with the callback delay
    Retry(CallbackContext),
    /// Budget spent; terminal `NotStabilized`
    Exhausted,
}

/// Combine both read paths into a verdict
///
/// For `Present` the lookup must succeed and the listing must contain the
/// identity. For `Absent` the lookup must report not-found and the listing
/// must not contain the identity. A lookup error other than not-found, or any
/// listing error, is `Indeterminate`.
#[must_use]
pub fn evaluate<M>(
    target: Target,
    observed: Result<M, ApiError>,
    listed: Result<bool, ApiError>,
) -> StabilizationVerdict<M> {
    match (target, observed, listed) {
        (Target::Present, Ok(model), Ok(true)) => StabilizationVerdict::Converged(Some(model)),
        (Target::Absent, Err(e), Ok(false)) if e.is_not_found() => {
            StabilizationVerdict::Converged(None)
        }
        (_, Err(e), _) if !e.is_not_found() => StabilizationVerdict::Indeterminate(e),
        (_, _, Err(e)) => StabilizationVerdict::Indeterminate(e),
        _ => StabilizationVerdict::NotYetConverged,
    }
}

/// Runs pending transitions against one resource type's control plane
#[derive(Debug)]
pub struct StabilizationEngine<'a, P> {
    provider: &'a P,
    target: Target,
}

impl<'a, P> StabilizationEngine<'a, P>
where
    P: ControlPlane,
{
    #[must_use]
    pub fn new(provider: &'a P, target: Target) -> Self {
        Self { provider, target }
    }

    /// Perform one pending transition
    ///
    /// The retry is spent before anything else happens. An exhausted budget
    /// returns without issuing a read, so the last word is never a lone,
    /// possibly stale observation.
    pub async fn advance(
        &self,
        identity: &ResourceIdentity,
        context: CallbackContext,
    ) -> Transition<P::Model> {
        let type_name = <P::Model as ResourceModel>::TYPE_NAME;
        let next = context.decremented();

        if next.is_exhausted() {
            warn!(
                resource_type = type_name,
                resource_id = %identity,
                target = ?self.target,
                "Retry budget exhausted before resource stabilized"
            );
            metrics::record_stabilization_check(type_name, "exhausted");
            return Transition::Exhausted;
        }

        let observed = self.provider.get(identity).await;
        let listed = resource_exists_in_listing(self.provider, identity).await;
        let verdict = evaluate(self.target, observed, listed);
        metrics::record_stabilization_check(type_name, verdict.label());

        match verdict {
            StabilizationVerdict::Converged(model) => {
                info!(
                    resource_type = type_name,
                    resource_id = %identity,
                    target = ?self.target,
                    retries_remaining = next.retries_remaining,
                    "Resource stabilized"
                );
                Transition::Converged(model)
            }
            StabilizationVerdict::NotYetConverged => {
                debug!(
                    resource_type = type_name,
                    resource_id = %identity,
                    target = ?self.target,
                    retries_remaining = next.retries_remaining,
                    "Resource not yet stabilized"
                );
                Transition::Retry(next)
            }
            StabilizationVerdict::Indeterminate(error) => {
                warn!(
                    resource_type = type_name,
                    resource_id = %identity,
                    target = ?self.target,
                    retries_remaining = next.retries_remaining,
                    error = %error,
                    "Stabilization check failed, will retry"
                );
                Transition::Retry(next)
            }
        }
    }
}

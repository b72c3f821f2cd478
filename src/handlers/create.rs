//! # Create Handler
//!
//! First invocation issues the one-shot `create` and records the returned
//! identity onto the model. Later invocations only poll: each one spends a
//! retry and asks the engine whether the resource is visible through both the
//! point lookup and the listing.
//!
//! A failed `create` is final. The desired model is still returned so the
//! orchestrator has something to roll back against.

use super::api_failure;
use crate::context::CallbackContext;
use crate::engine::{Phase, StabilizationEngine, Target, Transition};
use crate::error::HandlerErrorCode;
use crate::progress::{ProgressEvent, ResourceHandlerRequest};
use crate::provider::ControlPlane;
use crate::resources::ResourceModel;
use tracing::info;

pub async fn handle<P>(
    provider: &P,
    request: ResourceHandlerRequest<P::Model>,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let Some(desired) = request.desired_resource_state else {
        return ProgressEvent::failed(
            None,
            HandlerErrorCode::InvalidRequest,
            "Create requires a desired resource state",
        );
    };

    match Phase::of(callback_context) {
        Phase::Fresh => issue_create(provider, desired).await,
        Phase::Pending(context) => stabilize(provider, desired, context).await,
    }
}

async fn issue_create<P>(provider: &P, desired: P::Model) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let type_name = <P::Model as ResourceModel>::TYPE_NAME;
    info!(resource_type = type_name, "Creating resource");

    match provider.create(&desired).await {
        Ok(identity) => {
            info!(
                resource_type = type_name,
                resource_id = %identity,
                "Create accepted, waiting for resource to stabilize"
            );
            let model = desired.with_identity(&identity);
            ProgressEvent::in_progress(Some(model), CallbackContext::fresh().pending())
        }
        Err(e) => api_failure(Some(desired), "create", &e),
    }
}

async fn stabilize<P>(
    provider: &P,
    desired: P::Model,
    context: CallbackContext,
) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let type_name = <P::Model as ResourceModel>::TYPE_NAME;
    let Some(identity) = desired.identity() else {
        return ProgressEvent::failed(
            Some(desired),
            HandlerErrorCode::InternalFailure,
            format!("{type_name} is pending stabilization but the model carries no identifier"),
        );
    };

    match StabilizationEngine::new(provider, Target::Present)
        .advance(&identity, context)
        .await
    {
        Transition::Converged(model) => ProgressEvent::success(Some(model.unwrap_or(desired))),
        Transition::Retry(next) => ProgressEvent::in_progress(Some(desired), next),
        Transition::Exhausted => ProgressEvent::failed(
            Some(desired),
            HandlerErrorCode::NotStabilized,
            format!("{type_name} {identity} did not stabilize after create"),
        ),
    }
}

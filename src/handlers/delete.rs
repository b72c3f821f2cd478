//! # Delete Handler
//!
//! First invocation confirms the resource exists, then issues the one-shot
//! `delete`. Later invocations poll until the point lookup reports not-found
//! and the listing no longer contains the identity.
//!
//! Delete failures never carry a resource model.

use super::{api_failure, desired_identity, missing_identifier};
use crate::context::CallbackContext;
use crate::engine::{Phase, StabilizationEngine, Target, Transition};
use crate::error::HandlerErrorCode;
use crate::identity::ResourceIdentity;
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
    let Some(identity) = desired_identity(&request) else {
        return missing_identifier();
    };
    let model = request.desired_resource_state;

    match Phase::of(callback_context) {
        Phase::Fresh => issue_delete(provider, &identity, model).await,
        Phase::Pending(context) => stabilize(provider, &identity, model, context).await,
    }
}

async fn issue_delete<P>(
    provider: &P,
    identity: &ResourceIdentity,
    model: Option<P::Model>,
) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let type_name = <P::Model as ResourceModel>::TYPE_NAME;

    if let Err(e) = provider.get(identity).await {
        return api_failure(None, "read", &e);
    }

    info!(resource_type = type_name, resource_id = %identity, "Deleting resource");
    match provider.delete(identity).await {
        Ok(()) => {
            info!(
                resource_type = type_name,
                resource_id = %identity,
                "Delete accepted, waiting for resource to disappear"
            );
            ProgressEvent::in_progress(model, CallbackContext::fresh().pending())
        }
        Err(e) => api_failure(None, "delete", &e),
    }
}

async fn stabilize<P>(
    provider: &P,
    identity: &ResourceIdentity,
    model: Option<P::Model>,
    context: CallbackContext,
) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    match StabilizationEngine::new(provider, Target::Absent)
        .advance(identity, context)
        .await
    {
        Transition::Converged(_) => ProgressEvent::success(None),
        Transition::Retry(next) => ProgressEvent::in_progress(model, next),
        Transition::Exhausted => ProgressEvent::failed(
            None,
            HandlerErrorCode::NotStabilized,
            format!(
                "{} {identity} did not stabilize after delete",
                <P::Model as ResourceModel>::TYPE_NAME
            ),
        ),
    }
}

//! # Handlers
//!
//! Entry points invoked by the orchestration framework, one per lifecycle
//! action. Every invocation is independent: the only state carried between
//! calls is the resource model and the [`CallbackContext`] returned in the
//! previous [`ProgressEvent`].
//!
//! Create and Delete are asynchronous (issue, then stabilize across several
//! invocations). Read, Update and List complete in a single invocation.

use crate::context::CallbackContext;
use crate::error::{ApiError, HandlerErrorCode};
use crate::identity::ResourceIdentity;
use crate::observability::metrics;
use crate::progress::{Action, OperationStatus, ProgressEvent, ResourceHandlerRequest};
use crate::provider::ControlPlane;
use crate::resources::ResourceModel;
use tracing::{info, info_span, warn, Instrument};

pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod update;

/// Dispatch one invocation to the handler for `action`
///
/// Wraps the call in a span carrying the resource type and action, and records
/// the outcome counter.
pub async fn invoke<P>(
    provider: &P,
    action: Action,
    request: ResourceHandlerRequest<P::Model>,
    callback_context: Option<CallbackContext>,
) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let type_name = <P::Model as ResourceModel>::TYPE_NAME;
    let span = info_span!(
        "handler.invoke",
        resource_type = type_name,
        action = action.as_str(),
        retries_remaining = callback_context.map(|c| c.retries_remaining)
    );

    async move {
        let event = match action {
            Action::Create => create::handle(provider, request, callback_context).await,
            Action::Read => read::handle(provider, request).await,
            Action::Update => update::handle(provider, request).await,
            Action::Delete => delete::handle(provider, request, callback_context).await,
            Action::List => list::handle(provider, request).await,
        };

        metrics::record_handler_outcome(type_name, action.as_str(), event.status.as_str());
        if event.status == OperationStatus::Failed {
            warn!(
                error_code = event.error_code.map(|c| c.as_str()),
                message = event.message.as_deref(),
                "Handler failed"
            );
        } else {
            info!(status = event.status.as_str(), "Handler returned");
        }
        event
    }
    .instrument(span)
    .await
}

/// Like [`invoke`], for a callback context still in its serialized form
///
/// A context that does not decode fails the invocation with
/// `InternalFailure` rather than silently restarting the lifecycle.
pub async fn invoke_serialized<P>(
    provider: &P,
    action: Action,
    request: ResourceHandlerRequest<P::Model>,
    callback_context: Option<&serde_json::Value>,
) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    match CallbackContext::decode(callback_context) {
        Ok(context) => invoke(provider, action, request, context).await,
        Err(e) => {
            let type_name = <P::Model as ResourceModel>::TYPE_NAME;
            warn!(resource_type = type_name, action = action.as_str(), error = %e, "Unreadable callback context");
            metrics::record_handler_outcome(type_name, action.as_str(), OperationStatus::Failed.as_str());
            ProgressEvent::failed(
                None,
                HandlerErrorCode::InternalFailure,
                format!("Unreadable callback context: {e}"),
            )
        }
    }
}

/// Identity of the desired model, if one was supplied and carries it
fn desired_identity<M: ResourceModel>(request: &ResourceHandlerRequest<M>) -> Option<ResourceIdentity> {
    request
        .desired_resource_state
        .as_ref()
        .and_then(M::identity)
}

/// `NotFound` failure for a model that names no resource
fn missing_identifier<M: ResourceModel>() -> ProgressEvent<M> {
    ProgressEvent::failed(
        None,
        HandlerErrorCode::NotFound,
        format!("{} identifier is missing from the model", M::TYPE_NAME),
    )
}

/// Failure event for a control-plane error, counted against `operation`
fn api_failure<M: ResourceModel>(
    model: Option<M>,
    operation: &str,
    error: &ApiError,
) -> ProgressEvent<M> {
    metrics::increment_control_plane_errors(M::TYPE_NAME, operation);
    ProgressEvent::failed(
        model,
        HandlerErrorCode::from(error),
        format!("{} {operation} failed: {error}", M::TYPE_NAME),
    )
}

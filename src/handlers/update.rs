//! # Update Handler
//!
//! Synchronous: no callback context, no polling. Confirms the resource exists,
//! applies the mutable properties, reconciles tags and returns a fresh read.
//!
//! Tags are diffed as resource tags layered over stack tags, desired against
//! previous. Without a previous model the current snapshot's tags stand in.

use super::{api_failure, desired_identity, missing_identifier};
use crate::error::HandlerErrorCode;
use crate::progress::{ProgressEvent, ResourceHandlerRequest};
use crate::provider::ControlPlane;
use crate::resources::ResourceModel;
use crate::tags;
use tracing::info;

pub async fn handle<P>(provider: &P, request: ResourceHandlerRequest<P::Model>) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let type_name = <P::Model as ResourceModel>::TYPE_NAME;
    let Some(identity) = desired_identity(&request) else {
        return missing_identifier();
    };
    let ResourceHandlerRequest {
        desired_resource_state,
        previous_resource_state,
        desired_resource_tags,
        previous_resource_tags,
        ..
    } = request;
    let Some(desired) = desired_resource_state else {
        return missing_identifier();
    };

    let current = match provider.get(&identity).await {
        Ok(current) => current,
        Err(e) => return api_failure(None, "read", &e),
    };

    info!(resource_type = type_name, resource_id = %identity, "Updating resource");
    if let Err(e) = provider.update(&desired).await {
        return api_failure(Some(desired), "update", &e);
    }

    let desired_tags = tags::merge(desired.tags(), &desired_resource_tags);
    let previous_tags = tags::merge(
        previous_resource_state
            .as_ref()
            .map_or_else(|| current.tags(), ResourceModel::tags),
        &previous_resource_tags,
    );
    let diff = tags::diff(&desired_tags, &previous_tags);

    if !diff.is_empty() {
        let Some(arn) = current.arn().or_else(|| desired.arn()).map(str::to_string) else {
            return ProgressEvent::failed(
                Some(desired),
                HandlerErrorCode::InternalFailure,
                format!("{type_name} {identity} has no ARN to reconcile tags against"),
            );
        };

        if !diff.to_remove.is_empty() {
            if let Err(e) = provider.untag_resource(&arn, &diff.to_remove).await {
                return api_failure(Some(desired), "untag", &e);
            }
        }
        if !diff.to_add.is_empty() {
            if let Err(e) = provider.tag_resource(&arn, &diff.to_add).await {
                return api_failure(Some(desired), "tag", &e);
            }
        }
        info!(
            resource_type = type_name,
            resource_id = %identity,
            tags_added = diff.to_add.len(),
            tags_removed = diff.to_remove.len(),
            "Reconciled tags"
        );
    }

    match provider.get(&identity).await {
        Ok(model) => ProgressEvent::success(Some(model)),
        Err(e) => api_failure(None, "read", &e),
    }
}

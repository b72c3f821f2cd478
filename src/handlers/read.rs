//! # Read Handler

use super::{api_failure, desired_identity, missing_identifier};
use crate::progress::{ProgressEvent, ResourceHandlerRequest};
use crate::provider::ControlPlane;

pub async fn handle<P>(provider: &P, request: ResourceHandlerRequest<P::Model>) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let Some(identity) = desired_identity(&request) else {
        return missing_identifier();
    };

    match provider.get(&identity).await {
        Ok(model) => ProgressEvent::success(Some(model)),
        Err(e) => api_failure(None, "read", &e),
    }
}

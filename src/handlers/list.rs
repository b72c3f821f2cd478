//! # List Handler
//!
//! Returns one page of primary identifiers. Scoped resource types take their
//! scope (the owning membership) from the desired model.

use super::api_failure;
use crate::progress::{ProgressEvent, ResourceHandlerRequest};
use crate::provider::ControlPlane;
use crate::resources::ResourceModel;
use tracing::debug;

pub async fn handle<P>(provider: &P, request: ResourceHandlerRequest<P::Model>) -> ProgressEvent<P::Model>
where
    P: ControlPlane,
{
    let scope = request
        .desired_resource_state
        .as_ref()
        .and_then(ResourceModel::list_scope);

    match provider
        .list_page(scope.as_deref(), request.next_token.as_deref())
        .await
    {
        Ok(page) => {
            debug!(
                resource_type = <P::Model as ResourceModel>::TYPE_NAME,
                items = page.items.len(),
                has_more = page.next_token.is_some(),
                "Listed resources"
            );
            let models = page
                .items
                .iter()
                .map(<P::Model as ResourceModel>::from_identity)
                .collect();
            ProgressEvent::success_list(models, page.next_token)
        }
        Err(e) => api_failure(None, "list", &e),
    }
}

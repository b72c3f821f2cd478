//! # Control-Plane Provider
//!
//! Capability traits supplied per resource type. The handlers and the
//! stabilization engine only ever talk to the control plane through these,
//! so one engine serves all five resource types.
//!
//! Implementations are expected to perform their own transport-level retries;
//! nothing in this crate retries a mutating call.

use crate::error::ApiError;
use crate::identity::ResourceIdentity;
use crate::resources::ResourceModel;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};

/// One page of a paginated listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<ResourceIdentity>,
    pub next_token: Option<String>,
}

impl ListPage {
    #[must_use]
    pub fn new(items: Vec<ResourceIdentity>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }
}

/// Paginated listing of a resource type
///
/// Kept separate from [`ControlPlane`] so the list scanner depends on nothing
/// but listing.
#[async_trait]
pub trait ListPages: Send + Sync {
    /// Fetch one page. `scope` narrows the listing for scoped resource types
    /// (e.g. the membership that owns an analysis template).
    async fn list_page(
        &self,
        scope: Option<&str>,
        next_token: Option<&str>,
    ) -> Result<ListPage, ApiError>;
}

/// Control-plane operations for one resource type
#[async_trait]
pub trait ControlPlane: ListPages {
    type Model: ResourceModel;

    /// Issue the create call; returns the identity assigned by the service
    async fn create(&self, desired: &Self::Model) -> Result<ResourceIdentity, ApiError>;

    /// Point lookup returning a fully hydrated model
    async fn get(&self, identity: &ResourceIdentity) -> Result<Self::Model, ApiError>;

    async fn delete(&self, identity: &ResourceIdentity) -> Result<(), ApiError>;

    /// Apply the mutable properties of `desired` (tags excluded)
    async fn update(&self, desired: &Self::Model) -> Result<(), ApiError>;

    async fn tag_resource(&self, arn: &str, tags: &BTreeMap<String, String>)
        -> Result<(), ApiError>;

    async fn untag_resource(&self, arn: &str, keys: &BTreeSet<String>) -> Result<(), ApiError>;
}

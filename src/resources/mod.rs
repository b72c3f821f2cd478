//! # Resource Models
//!
//! One module per resource type. Each model is the desired/previous state the
//! framework hands to a handler, and the snapshot a control-plane `get`
//! returns. Property names follow the resource schemas (PascalCase).
//!
//! [`ResourceModel`] is the small surface the generic handlers need: where the
//! identity lives on the model, which tags it carries, and how listing is
//! scoped.

use crate::identity::ResourceIdentity;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

pub mod analysis_template;
pub mod collaboration;
pub mod configured_table;
pub mod configured_table_association;
pub mod membership;

pub use analysis_template::AnalysisTemplate;
pub use collaboration::Collaboration;
pub use configured_table::ConfiguredTable;
pub use configured_table_association::ConfiguredTableAssociation;
pub use membership::Membership;

/// Model of one resource type as seen by the handlers
pub trait ResourceModel:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + JsonSchema + 'static
{
    /// Registry type name, e.g. `AWS::CleanRooms::Collaboration`
    const TYPE_NAME: &'static str;

    /// Identity recorded on the model, if the service has assigned one
    fn identity(&self) -> Option<ResourceIdentity>;

    /// Record an identity returned by the control plane onto the model
    #[must_use]
    fn with_identity(self, identity: &ResourceIdentity) -> Self;

    /// Model carrying only the primary identifier (List results)
    fn from_identity(identity: &ResourceIdentity) -> Self;

    fn arn(&self) -> Option<&str>;

    /// Resource-level tags as a map
    fn tags(&self) -> BTreeMap<String, String>;

    /// Scope to pass to `list_page` when listing this type
    fn list_scope(&self) -> Option<String> {
        None
    }
}

/// Key/value tag as carried in resource models
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flatten a tag list; later duplicates win
#[must_use]
pub fn tags_to_map(tags: &[Tag]) -> BTreeMap<String, String> {
    tags.iter()
        .map(|tag| (tag.key.clone(), tag.value.clone()))
        .collect()
}

/// Whether query logging is enabled for a collaboration or membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryLogStatus {
    Enabled,
    #[default]
    Disabled,
}

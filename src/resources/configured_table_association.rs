//! # Configured Table Association
//!
//! `AWS::CleanRooms::ConfiguredTableAssociation`, linking a configured table
//! into a membership. Identified within the owning membership, and listed per
//! membership.

use super::{tags_to_map, ResourceModel, Tag};
use crate::identity::ResourceIdentity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfiguredTableAssociation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured_table_association_identifier: Option<String>,
    #[serde(default)]
    pub membership_identifier: String,
    #[serde(default)]
    pub configured_table_identifier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Role the service assumes to read the underlying table
    #[serde(default)]
    pub role_arn: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl ResourceModel for ConfiguredTableAssociation {
    const TYPE_NAME: &'static str = "AWS::CleanRooms::ConfiguredTableAssociation";

    fn identity(&self) -> Option<ResourceIdentity> {
        self.configured_table_association_identifier.as_ref().map(|id| ResourceIdentity {
            id: id.clone(),
            scope: self.list_scope(),
        })
    }

    fn with_identity(mut self, identity: &ResourceIdentity) -> Self {
        self.configured_table_association_identifier = Some(identity.id.clone());
        if let Some(scope) = &identity.scope {
            self.membership_identifier.clone_from(scope);
        }
        self
    }

    fn from_identity(identity: &ResourceIdentity) -> Self {
        Self::default().with_identity(identity)
    }

    fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    fn tags(&self) -> BTreeMap<String, String> {
        tags_to_map(&self.tags)
    }

    fn list_scope(&self) -> Option<String> {
        (!self.membership_identifier.is_empty()).then(|| self.membership_identifier.clone())
    }
}

//! # Collaboration
//!
//! `AWS::CleanRooms::Collaboration`, a top-level resource identified by its
//! collaboration id.

use super::{tags_to_map, QueryLogStatus, ResourceModel, Tag};
use crate::identity::ResourceIdentity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ability granted to a collaboration member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberAbility {
    CanQuery,
    CanReceiveResults,
}

/// Cryptographic computing settings, fixed at creation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DataEncryptionMetadata {
    pub allow_cleartext: bool,
    pub allow_duplicates: bool,
    pub allow_joins_on_columns_with_different_names: bool,
    pub preserve_nulls: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MemberSpecification {
    pub account_id: String,
    pub display_name: String,
    #[serde(default)]
    pub member_abilities: Vec<MemberAbility>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Collaboration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_identifier: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub creator_display_name: String,
    #[serde(default)]
    pub creator_member_abilities: Vec<MemberAbility>,
    #[serde(default)]
    pub members: Vec<MemberSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_encryption_metadata: Option<DataEncryptionMetadata>,
    #[serde(default)]
    pub query_log_status: QueryLogStatus,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl ResourceModel for Collaboration {
    const TYPE_NAME: &'static str = "AWS::CleanRooms::Collaboration";

    fn identity(&self) -> Option<ResourceIdentity> {
        self.collaboration_identifier
            .as_ref()
            .map(ResourceIdentity::new)
    }

    fn with_identity(mut self, identity: &ResourceIdentity) -> Self {
        self.collaboration_identifier = Some(identity.id.clone());
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
}

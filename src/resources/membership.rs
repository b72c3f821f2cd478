//! # Membership
//!
//! `AWS::CleanRooms::Membership`, this account's participation in a
//! collaboration.

use super::{tags_to_map, QueryLogStatus, ResourceModel, Tag};
use crate::identity::ResourceIdentity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultFormat {
    #[default]
    Csv,
    Parquet,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct S3OutputConfiguration {
    pub bucket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub result_format: ResultFormat,
}

/// Where protected query results land by default
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct MembershipResultConfiguration {
    pub output_configuration: S3OutputConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Membership {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_identifier: Option<String>,
    #[serde(default)]
    pub collaboration_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_creator_account_id: Option<String>,
    #[serde(default)]
    pub query_log_status: QueryLogStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_result_configuration: Option<MembershipResultConfiguration>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl ResourceModel for Membership {
    const TYPE_NAME: &'static str = "AWS::CleanRooms::Membership";

    fn identity(&self) -> Option<ResourceIdentity> {
        self.membership_identifier.as_ref().map(ResourceIdentity::new)
    }

    fn with_identity(mut self, identity: &ResourceIdentity) -> Self {
        self.membership_identifier = Some(identity.id.clone());
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

//! # Configured Table
//!
//! `AWS::CleanRooms::ConfiguredTable`: a Glue table exposed to collaborations
//! together with the analysis rules that constrain queries against it.

use super::{tags_to_map, ResourceModel, Tag};
use crate::identity::ResourceIdentity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisMethod {
    #[default]
    DirectQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisRuleType {
    Aggregation,
    List,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct GlueTableReference {
    pub database_name: String,
    pub table_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TableReference {
    pub glue: GlueTableReference,
}

/// One analysis rule. The policy document is kept opaque; its shape depends on
/// the rule type and is validated by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisRule {
    #[serde(rename = "Type")]
    pub rule_type: AnalysisRuleType,
    pub policy: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfiguredTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured_table_identifier: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub allowed_columns: Vec<String>,
    #[serde(default)]
    pub analysis_method: AnalysisMethod,
    #[serde(default)]
    pub analysis_rules: Vec<AnalysisRule>,
    #[serde(default)]
    pub table_reference: TableReference,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl ResourceModel for ConfiguredTable {
    const TYPE_NAME: &'static str = "AWS::CleanRooms::ConfiguredTable";

    fn identity(&self) -> Option<ResourceIdentity> {
        self.configured_table_identifier
            .as_ref()
            .map(ResourceIdentity::new)
    }

    fn with_identity(mut self, identity: &ResourceIdentity) -> Self {
        self.configured_table_identifier = Some(identity.id.clone());
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

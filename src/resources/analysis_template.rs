//! # Analysis Template
//!
//! `AWS::CleanRooms::AnalysisTemplate`, a parameterised SQL analysis owned by
//! a membership.

use super::{tags_to_map, ResourceModel, Tag};
use crate::identity::ResourceIdentity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisFormat {
    #[default]
    Sql,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisSource {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisParameter {
    pub name: String,
    #[serde(rename = "Type")]
    pub parameter_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisSchema {
    #[serde(default)]
    pub referenced_tables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_template_identifier: Option<String>,
    #[serde(default)]
    pub membership_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration_arn: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub format: AnalysisFormat,
    #[serde(default)]
    pub source: AnalysisSource,
    #[serde(default)]
    pub analysis_parameters: Vec<AnalysisParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<AnalysisSchema>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl ResourceModel for AnalysisTemplate {
    const TYPE_NAME: &'static str = "AWS::CleanRooms::AnalysisTemplate";

    fn identity(&self) -> Option<ResourceIdentity> {
        self.analysis_template_identifier.as_ref().map(|id| ResourceIdentity {
            id: id.clone(),
            scope: self.list_scope(),
        })
    }

    fn with_identity(mut self, identity: &ResourceIdentity) -> Self {
        self.analysis_template_identifier = Some(identity.id.clone());
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

//! # Progress Events
//!
//! Boundary types exchanged with the invocation framework: the request a
//! handler receives and the progress event it returns.

use crate::constants::CALLBACK_DELAY_SECONDS;
use crate::context::CallbackContext;
use crate::error::HandlerErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle operation requested by the framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Action {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Success,
    Failed,
}

impl OperationStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::InProgress => "in_progress",
            OperationStatus::Success => "success",
            OperationStatus::Failed => "failed",
        }
    }
}

/// Request passed to a handler invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest<M> {
    pub desired_resource_state: Option<M>,
    #[serde(default)]
    pub previous_resource_state: Option<M>,
    /// Stack-level tags to apply in addition to the model's own tags
    #[serde(default)]
    pub desired_resource_tags: BTreeMap<String, String>,
    #[serde(default)]
    pub previous_resource_tags: BTreeMap<String, String>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl<M> ResourceHandlerRequest<M> {
    #[must_use]
    pub fn new(desired: M) -> Self {
        Self {
            desired_resource_state: Some(desired),
            previous_resource_state: None,
            desired_resource_tags: BTreeMap::new(),
            previous_resource_tags: BTreeMap::new(),
            next_token: None,
        }
    }

    #[must_use]
    pub fn with_previous(mut self, previous: M) -> Self {
        self.previous_resource_state = Some(previous);
        self
    }
}

/// Result of a single handler invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent<M> {
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<M>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<M>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_delay_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl<M> ProgressEvent<M> {
    fn empty(status: OperationStatus) -> Self {
        Self {
            status,
            resource_model: None,
            resource_models: None,
            callback_context: None,
            callback_delay_seconds: None,
            error_code: None,
            message: None,
            next_token: None,
        }
    }

    /// Ask the framework to reinvoke after the fixed callback delay
    #[must_use]
    pub fn in_progress(model: Option<M>, context: CallbackContext) -> Self {
        Self {
            resource_model: model,
            callback_context: Some(context),
            callback_delay_seconds: Some(CALLBACK_DELAY_SECONDS),
            ..Self::empty(OperationStatus::InProgress)
        }
    }

    #[must_use]
    pub fn success(model: Option<M>) -> Self {
        Self {
            resource_model: model,
            ..Self::empty(OperationStatus::Success)
        }
    }

    #[must_use]
    pub fn success_list(models: Vec<M>, next_token: Option<String>) -> Self {
        Self {
            resource_models: Some(models),
            next_token,
            ..Self::empty(OperationStatus::Success)
        }
    }

    #[must_use]
    pub fn failed(
        model: Option<M>,
        error_code: HandlerErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            resource_model: model,
            error_code: Some(error_code),
            message: Some(message.into()),
            ..Self::empty(OperationStatus::Failed)
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status != OperationStatus::InProgress
    }
}

//! # Errors
//!
//! Control-plane errors raised by [`crate::provider::ControlPlane`]
//! implementations, and the error codes reported back to the invocation
//! framework.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by a control-plane call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("resource not found: {0}")]
    NotFound(String),
    #[error("request rejected: {0}")]
    Validation(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("request throttled: {0}")]
    Throttled(String),
    #[error("service quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("conflicting operation in progress: {0}")]
    Conflict(String),
    #[error("service failure: {0}")]
    Service(String),
}

impl ApiError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error code carried by a `FAILED` progress event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    /// Resource absent when presence was required
    NotFound,
    /// Caller input rejected by the control plane
    InvalidRequest,
    /// Retry budget exhausted without reaching the target state
    NotStabilized,
    /// Unmapped transient or permanent control-plane error
    GeneralServiceException,
    AccessDenied,
    Throttling,
    ServiceLimitExceeded,
    ResourceConflict,
    /// The handler could not interpret its own input
    InternalFailure,
}

impl From<&ApiError> for HandlerErrorCode {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::NotFound(_) => Self::NotFound,
            ApiError::Validation(_) => Self::InvalidRequest,
            ApiError::AccessDenied(_) => Self::AccessDenied,
            ApiError::Throttled(_) => Self::Throttling,
            ApiError::QuotaExceeded(_) => Self::ServiceLimitExceeded,
            ApiError::Conflict(_) => Self::ResourceConflict,
            ApiError::Service(_) => Self::GeneralServiceException,
        }
    }
}

impl HandlerErrorCode {
    /// Wire name of the code
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::InvalidRequest => "InvalidRequest",
            Self::NotStabilized => "NotStabilized",
            Self::GeneralServiceException => "GeneralServiceException",
            Self::AccessDenied => "AccessDenied",
            Self::Throttling => "Throttling",
            Self::ServiceLimitExceeded => "ServiceLimitExceeded",
            Self::ResourceConflict => "ResourceConflict",
            Self::InternalFailure => "InternalFailure",
        }
    }
}

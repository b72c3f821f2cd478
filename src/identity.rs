//! # Resource Identity
//!
//! Stable key of a managed resource: the service-assigned id plus, for
//! resource types that live inside a membership, the id of that scope.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl ResourceIdentity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scope: None,
        }
    }

    #[must_use]
    pub fn scoped(scope: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scope: Some(scope.into()),
        }
    }

    /// Whether a listed item refers to this resource
    ///
    /// Ids must be equal. Scopes are compared only when both sides carry one,
    /// since list responses for a scoped listing may omit the scope.
    #[must_use]
    pub fn matches(&self, listed: &ResourceIdentity) -> bool {
        if self.id != listed.id {
            return false;
        }
        match (&self.scope, &listed.scope) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => true,
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{scope}|{}", self.id),
            None => f.write_str(&self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_same_id_without_scope() {
        let id = ResourceIdentity::new("collab-1");
        assert!(id.matches(&ResourceIdentity::new("collab-1")));
        assert!(!id.matches(&ResourceIdentity::new("collab-2")));
    }

    #[test]
    fn test_matches_compares_scope_when_both_present() {
        let id = ResourceIdentity::scoped("membership-a", "template-1");
        assert!(id.matches(&ResourceIdentity::scoped("membership-a", "template-1")));
        assert!(!id.matches(&ResourceIdentity::scoped("membership-b", "template-1")));
        assert!(id.matches(&ResourceIdentity::new("template-1")));
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceIdentity::new("abc").to_string(), "abc");
        assert_eq!(ResourceIdentity::scoped("m", "abc").to_string(), "m|abc");
    }
}

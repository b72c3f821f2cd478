//! # Tag Reconciler
//!
//! Computes what an update must tag and untag. System-owned keys
//! ([`SYSTEM_TAG_PREFIX`]) are dropped from both sides before diffing, so they
//! are never added or removed by a handler.

use crate::constants::SYSTEM_TAG_PREFIX;
use std::collections::{BTreeMap, BTreeSet};

/// Tags to apply and keys to remove
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    pub to_add: BTreeMap<String, String>,
    pub to_remove: BTreeSet<String>,
}

impl TagDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

fn is_system_key(key: &str) -> bool {
    key.starts_with(SYSTEM_TAG_PREFIX)
}

/// Diff desired against previous tags
///
/// `to_add` holds entries whose key is new or whose value changed;
/// `to_remove` holds keys only present in `previous`.
#[must_use]
pub fn diff(desired: &BTreeMap<String, String>, previous: &BTreeMap<String, String>) -> TagDiff {
    let to_add = desired
        .iter()
        .filter(|(key, _)| !is_system_key(key))
        .filter(|(key, value)| previous.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let to_remove = previous
        .keys()
        .filter(|key| !is_system_key(key) && !desired.contains_key(*key))
        .cloned()
        .collect();

    TagDiff { to_add, to_remove }
}

/// Resource-level tags layered over stack-level tags
///
/// Resource tags win on key collisions.
#[must_use]
pub fn merge(
    resource_tags: BTreeMap<String, String>,
    stack_tags: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = stack_tags.clone();
    merged.extend(resource_tags);
    merged
}

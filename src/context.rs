//! # Callback Context
//!
//! The only state that crosses invocation boundaries. The invocation framework
//! stores it opaquely and replays it on the next call, so the serialized form
//! is exactly two fields:
//!
//! ```json
//! { "retriesRemaining": 4, "pendingStabilization": true }
//! ```
//!
//! Values are never mutated in place. Every transition returns a new context
//! that replaces the previous one wholesale.

use crate::constants::MAX_RETRIES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallbackContext {
    pub retries_remaining: i32,
    pub pending_stabilization: bool,
}

impl Default for CallbackContext {
    fn default() -> Self {
        Self::fresh()
    }
}

impl CallbackContext {
    /// Context of a first invocation: full budget, nothing issued yet
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            retries_remaining: MAX_RETRIES,
            pending_stabilization: false,
        }
    }

    /// Context returned right after the mutating call succeeds
    #[must_use]
    pub const fn pending(self) -> Self {
        Self {
            retries_remaining: self.retries_remaining,
            pending_stabilization: true,
        }
    }

    /// Context for the next stabilization attempt, one retry spent
    #[must_use]
    pub const fn decremented(self) -> Self {
        Self {
            retries_remaining: self.retries_remaining.saturating_sub(1),
            pending_stabilization: self.pending_stabilization,
        }
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.retries_remaining < 0
    }

    /// Encode for the framework
    ///
    /// # Errors
    ///
    /// Returns an error only if `serde_json` fails to serialize two scalars.
    pub fn encode(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Decode what the framework replayed; `null` or absent means fresh start
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not a two-field context.
    pub fn decode(value: Option<&serde_json::Value>) -> serde_json::Result<Option<Self>> {
        match value {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => Self::deserialize(value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fresh_context() {
        let ctx = CallbackContext::fresh();
        assert_eq!(ctx.retries_remaining, MAX_RETRIES);
        assert!(!ctx.pending_stabilization);
        assert!(!ctx.is_exhausted());
    }

    #[test]
    fn test_pending_keeps_budget() {
        let ctx = CallbackContext::fresh().pending();
        assert_eq!(ctx.retries_remaining, MAX_RETRIES);
        assert!(ctx.pending_stabilization);
    }

    #[test]
    fn test_decrement_reaches_exhaustion_below_zero() {
        let ctx = CallbackContext {
            retries_remaining: 1,
            pending_stabilization: true,
        };
        let once = ctx.decremented();
        assert_eq!(once.retries_remaining, 0);
        assert!(!once.is_exhausted());
        let twice = once.decremented();
        assert_eq!(twice.retries_remaining, -1);
        assert!(twice.is_exhausted());
        // source value untouched
        assert_eq!(ctx.retries_remaining, 1);
    }

    #[test]
    fn test_encode_has_exactly_two_fields() {
        let value = CallbackContext::fresh().pending().encode().unwrap();
        assert_eq!(
            value,
            json!({ "retriesRemaining": MAX_RETRIES, "pendingStabilization": true })
        );
        assert_eq!(value.as_object().map(serde_json::Map::len), Some(2));
    }

    #[test]
    fn test_decode_null_is_fresh_start() {
        assert_eq!(CallbackContext::decode(None).unwrap(), None);
        assert_eq!(CallbackContext::decode(Some(&json!(null))).unwrap(), None);
    }

    #[test]
    fn test_decode_round_trips_encoded_value() {
        let value = json!({ "retriesRemaining": 3, "pendingStabilization": true });
        let ctx = CallbackContext::decode(Some(&value)).unwrap().unwrap();
        assert_eq!(ctx.retries_remaining, 3);
        assert!(ctx.pending_stabilization);
    }

    #[test]
    fn test_decode_rejects_extra_fields() {
        let value = json!({ "retriesRemaining": 3, "pendingStabilization": true, "phase": "x" });
        assert!(CallbackContext::decode(Some(&value)).is_err());
    }
}

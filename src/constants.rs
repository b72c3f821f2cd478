//! # Constants
//!
//! Shared constants used by every resource type.
//!
//! The retry budget and callback delay are fixed: all five resource types
//! stabilize under the same bounds and they are not derived from configuration.

/// Number of stabilization checks allowed after the mutating call succeeds.
///
/// A reconciliation that started with this budget fails with `NotStabilized`
/// on its `MAX_RETRIES + 1`th pending invocation.
pub const MAX_RETRIES: i32 = 5;

/// Delay hint returned with every `IN_PROGRESS` event (seconds)
pub const CALLBACK_DELAY_SECONDS: u32 = 10;

/// Upper bound on pages fetched by one listing scan
///
/// A control plane that keeps returning a continuation token would otherwise
/// hold a single invocation open indefinitely.
pub const MAX_LIST_PAGES: usize = 1000;

/// Tag keys carrying this prefix are owned by the platform and never diffed
pub const SYSTEM_TAG_PREFIX: &str = "aws:";

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "json";

//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default output format.
pub const FORMAT: &str = "text";

/// Default HTTP timeout for the external IP lookup, in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default HTTP timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

//! Error types for classification.

use thiserror::Error;

use super::Platform;

/// Error type for classification failures.
///
/// Only primary-interface selection can fail; every other step degrades
/// gracefully (missing heuristics, absent external IP).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// No non-loopback IPv4 record matched the platform's selection rule.
    ///
    /// This is fatal to the whole call; no partial summary is produced.
    #[error("No primary interface found for platform '{platform}'")]
    NoPrimaryInterface {
        /// The platform whose selection rule found no candidate.
        platform: Platform,
    },
}

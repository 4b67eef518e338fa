//! Interface enumeration trait and error types.

use thiserror::Error;

use super::RawInterfaceRecord;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating the host's network interface records.
///
/// # Design
///
/// - The OS is treated as a black box behind this trait
/// - Enables dependency injection for testing with mock implementations
/// - No retrying or caching; every call reflects the current OS state
///
/// # Example
///
/// ```ignore
/// use netcheck::network::{InterfaceSource, RawInterfaceRecord, SourceError};
///
/// struct MockSource {
///     records: Vec<RawInterfaceRecord>,
/// }
///
/// impl InterfaceSource for MockSource {
///     fn list(&self) -> Result<Vec<RawInterfaceRecord>, SourceError> {
///         Ok(self.records.clone())
///     }
/// }
/// ```
pub trait InterfaceSource: Send + Sync {
    /// Returns one record per assigned address across all interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when:
    /// - Insufficient permissions to access network information
    ///   (`SourceError::PermissionDenied`)
    /// - Other platform-specific failures (`SourceError::Platform`)
    ///
    /// # Implementation Notes
    ///
    /// - Implementations must return ALL records; filtering is done by the caller
    /// - Record order should be stable across calls, with addresses of the
    ///   same interface kept adjacent and in OS-reported order
    fn list(&self) -> Result<Vec<RawInterfaceRecord>, SourceError>;
}

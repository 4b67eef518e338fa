//! Network layer for enumerating and representing interface addresses.
//!
//! This module provides types and traits for:
//! - Representing raw OS-reported interface records ([`RawInterfaceRecord`])
//! - Address family classification ([`AddressFamily`])
//! - Enumerating interfaces ([`InterfaceSource`])
//! - The production enumeration backend ([`SystemSource`])

mod record;
mod source;
mod system;

pub use record::{AddressFamily, RawInterfaceRecord};
pub use source::{InterfaceSource, SourceError};
pub use system::SystemSource;

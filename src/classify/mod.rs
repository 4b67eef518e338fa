//! Interface classification: primary selection, VPN detection, grouping.
//!
//! This module provides the classifier that turns a flat list of
//! [`RawInterfaceRecord`](crate::network::RawInterfaceRecord)s into a
//! structured [`NetworkSummary`]:
//! - Platform heuristics ([`Platform`])
//! - The classification operation ([`classify`], [`classify_at`])
//! - Output records ([`NetworkSummary`], [`GroupedInterfaces`], [`NetworkStats`])

mod classifier;
mod error;
mod platform;
mod summary;

#[cfg(test)]
mod classifier_tests;

pub use classifier::{classify, classify_at};
pub use error::ClassifyError;
pub use platform::Platform;
pub use summary::{
    GroupedInterfaces, InterfaceGroup, NetworkStats, NetworkSummary, PrimaryInterface,
};

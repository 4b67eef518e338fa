//! Raw interface record types as reported by the operating system.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Address family of a single interface record.
///
/// Every record belongs to exactly one family, derived from its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    /// An IPv4 address record.
    #[serde(rename = "IPv4")]
    V4,
    /// An IPv6 address record.
    #[serde(rename = "IPv6")]
    V6,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// A single address assignment on a network interface, as reported by
/// the operating system.
///
/// Records are supplied verbatim by the enumeration backend and never
/// mutated afterwards. An interface with several addresses produces one
/// record per address, all sharing the interface name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInterfaceRecord {
    /// The interface name (e.g., "eth0", "en0", "Ethernet").
    pub name: String,
    /// The assigned address.
    pub address: IpAddr,
    /// The subnet mask for this address.
    pub netmask: IpAddr,
    /// IPv6 scope id, when the address is scoped to an interface.
    pub scope_id: Option<u32>,
    /// The address in CIDR notation (e.g., "192.168.1.5/24").
    pub cidr: String,
    /// The interface's MAC address, when it has one.
    pub mac: Option<String>,
}

impl RawInterfaceRecord {
    /// Creates a new interface record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: IpAddr,
        netmask: IpAddr,
        scope_id: Option<u32>,
        cidr: impl Into<String>,
        mac: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address,
            netmask,
            scope_id,
            cidr: cidr.into(),
            mac,
        }
    }

    /// Returns the address family this record belongs to.
    #[must_use]
    pub const fn family(&self) -> AddressFamily {
        match self.address {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Returns true if this is an IPv4 record.
    #[must_use]
    pub const fn is_ipv4(&self) -> bool {
        matches!(self.family(), AddressFamily::V4)
    }

    /// Returns true if this is an IPv6 record.
    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        matches!(self.family(), AddressFamily::V6)
    }

    /// Returns true if the address is a loopback address (127.0.0.0/8 or ::1).
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        match self.address {
            IpAddr::V4(v4) => v4.is_loopback(),
            IpAddr::V6(v6) => v6.is_loopback(),
        }
    }
}

//! Production interface enumeration backed by `pnet`.

use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use super::{InterfaceSource, RawInterfaceRecord, SourceError};

/// Enumerates interfaces via the OS datalink layer.
///
/// Each assigned address becomes one [`RawInterfaceRecord`], preserving
/// the OS-reported interface and address order. The netmask and CIDR
/// string are derived from the address prefix; the scope id is the
/// interface index for IPv6 link-local addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl SystemSource {
    /// Creates a new system source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl InterfaceSource for SystemSource {
    fn list(&self) -> Result<Vec<RawInterfaceRecord>, SourceError> {
        let interfaces = datalink::interfaces();
        Ok(interfaces.iter().flat_map(records_for).collect())
    }
}

/// Expands one OS interface into per-address records.
fn records_for(interface: &NetworkInterface) -> Vec<RawInterfaceRecord> {
    let mac = interface.mac.map(|m| m.to_string());

    interface
        .ips
        .iter()
        .map(|network| {
            RawInterfaceRecord::new(
                &interface.name,
                network.ip(),
                network.mask(),
                scope_id(interface, network),
                network.to_string(),
                mac.clone(),
            )
        })
        .collect()
}

/// Returns the scope id for link-local IPv6 addresses.
///
/// The datalink layer does not expose per-address scope ids, so the
/// interface index is reported for addresses that are interface-scoped.
fn scope_id(interface: &NetworkInterface, network: &IpNetwork) -> Option<u32> {
    match network.ip() {
        IpAddr::V6(v6) if v6.is_unicast_link_local() => Some(interface.index),
        _ => None,
    }
}

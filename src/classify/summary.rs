//! Structured summary types produced by classification.

use std::collections::{BTreeMap, BTreeSet};
use std::net::IpAddr;

use serde::Serialize;

use crate::network::{AddressFamily, RawInterfaceRecord};

use super::Platform;

/// The selected primary interface descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryInterface {
    /// Interface name.
    pub name: String,
    /// The selected address.
    pub address: IpAddr,
    /// Address family of the selected record.
    pub family: AddressFamily,
    /// MAC address, when the interface has one.
    pub mac: Option<String>,
    /// Subnet mask of the selected address.
    pub netmask: IpAddr,
    /// The address in CIDR notation.
    pub cidr: String,
}

impl From<&RawInterfaceRecord> for PrimaryInterface {
    fn from(record: &RawInterfaceRecord) -> Self {
        Self {
            name: record.name.clone(),
            address: record.address,
            family: record.family(),
            mac: record.mac.clone(),
            netmask: record.netmask,
            cidr: record.cidr.clone(),
        }
    }
}

/// Addresses of a single interface: at most one IPv4 record and an
/// ordered list of IPv6 records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceGroup {
    /// The interface's IPv4 record. The first IPv4 record seen for a
    /// name claims the slot; later ones are ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<RawInterfaceRecord>,
    /// All IPv6 records for the interface, in input order.
    pub ipv6: Vec<RawInterfaceRecord>,
}

/// Mapping from interface name to its grouped addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedInterfaces(BTreeMap<String, InterfaceGroup>);

impl GroupedInterfaces {
    /// Groups records by interface name in a single pass over the input.
    #[must_use]
    pub fn from_records(records: &[RawInterfaceRecord]) -> Self {
        let mut groups: BTreeMap<String, InterfaceGroup> = BTreeMap::new();

        for record in records {
            let group = groups.entry(record.name.clone()).or_default();
            match record.family() {
                AddressFamily::V4 => {
                    if group.ipv4.is_none() {
                        group.ipv4 = Some(record.clone());
                    }
                }
                AddressFamily::V6 => group.ipv6.push(record.clone()),
            }
        }

        Self(groups)
    }

    /// Returns the group for an interface name, if any record carried it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&InterfaceGroup> {
        self.0.get(name)
    }

    /// Returns the number of distinct interface names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no records were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over (name, group) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &InterfaceGroup)> {
        self.0.iter()
    }
}

/// Derived aggregate statistics over the unfiltered input records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    /// Number of IPv4 records in the input.
    pub ipv4_count: usize,
    /// Number of IPv6 records in the input.
    pub ipv6_count: usize,
    /// Set of distinct interface names seen.
    pub interface_types: BTreeSet<String>,
    /// True if any record's name is VPN-like for the platform.
    pub has_vpn: bool,
}

impl NetworkStats {
    /// Collects statistics over the full record list.
    ///
    /// Counts are over the raw input, not the grouped view; VPN-likeness
    /// considers every record regardless of family.
    #[must_use]
    pub fn collect(records: &[RawInterfaceRecord], platform: Platform) -> Self {
        let ipv4_count = records.iter().filter(|r| r.is_ipv4()).count();
        let ipv6_count = records.iter().filter(|r| r.is_ipv6()).count();
        let interface_types = records.iter().map(|r| r.name.clone()).collect();
        let has_vpn = records.iter().any(|r| platform.is_vpn_like(&r.name));

        Self {
            ipv4_count,
            ipv6_count,
            interface_types,
            has_vpn,
        }
    }
}

/// The full classification result for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    /// The selected primary interface.
    pub primary: PrimaryInterface,
    /// All interfaces grouped by name.
    pub interfaces: GroupedInterfaces,
    /// Aggregate statistics.
    pub stats: NetworkStats,
    /// Externally observed public IP, when the echo service responded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ip: Option<String>,
    /// ISO-8601 timestamp of when the snapshot was taken.
    pub checked_at: String,
}

impl NetworkSummary {
    /// Attaches an externally observed IP to the summary.
    #[must_use]
    pub fn with_external_ip(mut self, ip: impl Into<String>) -> Self {
        self.external_ip = Some(ip.into());
        self
    }
}

//! Netcheck: Local Network Configuration Snapshot
//!
//! A library for inspecting the host's network interfaces, classifying
//! them (primary interface, VPN detection, IPv4/IPv6 grouping), and
//! augmenting the result with an externally observed public IP address.

pub mod classify;
pub mod config;
pub mod external;
pub mod network;
pub mod output;
pub mod time;

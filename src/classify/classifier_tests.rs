//! Tests for the classification operation.

use chrono::{TimeZone, Utc};

use crate::network::RawInterfaceRecord;

use super::{ClassifyError, GroupedInterfaces, NetworkStats, Platform, classify, classify_at};
use crate::time::Clock;

fn v4(name: &str, address: &str) -> RawInterfaceRecord {
    RawInterfaceRecord::new(
        name,
        address.parse().unwrap(),
        "255.255.255.0".parse().unwrap(),
        None,
        format!("{address}/24"),
        Some("aa:bb:cc:dd:ee:ff".to_string()),
    )
}

fn v6(name: &str, address: &str) -> RawInterfaceRecord {
    RawInterfaceRecord::new(
        name,
        address.parse().unwrap(),
        "ffff:ffff:ffff:ffff::".parse().unwrap(),
        None,
        format!("{address}/64"),
        Some("aa:bb:cc:dd:ee:ff".to_string()),
    )
}

fn noon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap()
}

mod primary_selection {
    use super::*;

    #[test]
    fn apple_family_picks_en0_over_loopback() {
        let records = vec![v4("en0", "192.168.1.5"), v4("lo0", "127.0.0.1")];

        let summary = classify_at(&records, Platform::MacOs, noon()).unwrap();

        assert_eq!(summary.primary.name, "en0");
        assert_eq!(summary.primary.address, "192.168.1.5".parse::<std::net::IpAddr>().unwrap());
    }

    #[test]
    fn apple_family_without_en0_fails() {
        let records = vec![v4("en1", "192.168.1.5"), v4("lo0", "127.0.0.1")];

        let result = classify_at(&records, Platform::MacOs, noon());

        assert_eq!(
            result.unwrap_err(),
            ClassifyError::NoPrimaryInterface {
                platform: Platform::MacOs
            }
        );
    }

    #[test]
    fn windows_family_picks_first_non_vpn_like_name() {
        // The rule on Windows is "not VPN-like", not "matches a default name".
        let records = vec![v4("TAP-Windows", "10.8.0.2"), v4("Ethernet", "10.0.0.5")];

        let summary = classify_at(&records, Platform::Windows, noon()).unwrap();

        assert_eq!(summary.primary.name, "Ethernet");
        assert_eq!(summary.primary.address, "10.0.0.5".parse::<std::net::IpAddr>().unwrap());
    }

    #[test]
    fn windows_family_with_only_vpn_like_names_fails() {
        let records = vec![v4("TAP-Windows", "10.8.0.2"), v4("My VPN", "10.9.0.2")];

        let result = classify_at(&records, Platform::Windows, noon());

        assert!(result.is_err());
    }

    #[test]
    fn loopback_never_selected_even_with_matching_name() {
        // An eth0 record carrying a 127.x address must not qualify.
        let records = vec![v4("eth0", "127.0.0.1")];

        let result = classify_at(&records, Platform::Linux, noon());

        assert_eq!(
            result.unwrap_err(),
            ClassifyError::NoPrimaryInterface {
                platform: Platform::Linux
            }
        );
    }

    #[test]
    fn first_qualifying_record_in_input_order_wins() {
        let records = vec![
            v6("eth0", "fe80::1"),
            v4("eth0", "192.168.1.5"),
            v4("eth0", "192.168.2.5"),
        ];

        let summary = classify_at(&records, Platform::Linux, noon()).unwrap();

        assert_eq!(summary.primary.address, "192.168.1.5".parse::<std::net::IpAddr>().unwrap());
    }

    #[test]
    fn ipv6_records_never_qualify_as_primary() {
        let records = vec![v6("eth0", "2001:db8::1")];

        let result = classify_at(&records, Platform::Linux, noon());

        assert!(result.is_err());
    }

    #[test]
    fn unknown_platform_falls_back_to_eth0() {
        let records = vec![v4("eth0", "192.168.1.5")];

        let summary = classify_at(&records, Platform::Unknown, noon()).unwrap();

        assert_eq!(summary.primary.name, "eth0");
    }

    #[test]
    fn empty_input_fails() {
        let result = classify_at(&[], Platform::Linux, noon());

        assert!(result.is_err());
    }

    #[test]
    fn primary_descriptor_carries_record_fields() {
        let records = vec![v4("eth0", "192.168.1.5")];

        let summary = classify_at(&records, Platform::Linux, noon()).unwrap();

        assert_eq!(summary.primary.mac.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(
            summary.primary.netmask,
            "255.255.255.0".parse::<std::net::IpAddr>().unwrap()
        );
        assert_eq!(summary.primary.cidr, "192.168.1.5/24");
    }
}

mod grouping {
    use super::*;

    #[test]
    fn first_ipv4_record_per_name_wins() {
        let records = vec![
            v4("eth0", "192.168.1.5"),
            v4("eth0", "192.168.2.5"),
            v4("eth1", "10.0.0.5"),
        ];

        let grouped = GroupedInterfaces::from_records(&records);

        let eth0 = grouped.get("eth0").unwrap();
        assert_eq!(
            eth0.ipv4.as_ref().unwrap().address,
            "192.168.1.5".parse::<std::net::IpAddr>().unwrap()
        );
        assert!(grouped.get("eth1").unwrap().ipv4.is_some());
    }

    #[test]
    fn ipv6_records_append_in_input_order() {
        let records = vec![
            v6("eth0", "fe80::1"),
            v6("eth0", "2001:db8::1"),
            v6("eth0", "2001:db8::2"),
        ];

        let grouped = GroupedInterfaces::from_records(&records);

        let addresses: Vec<_> = grouped
            .get("eth0")
            .unwrap()
            .ipv6
            .iter()
            .map(|r| r.address.to_string())
            .collect();
        assert_eq!(addresses, ["fe80::1", "2001:db8::1", "2001:db8::2"]);
    }

    #[test]
    fn grouping_is_idempotent() {
        let records = vec![
            v4("eth0", "192.168.1.5"),
            v6("eth0", "fe80::1"),
            v4("wlan0", "192.168.1.6"),
        ];

        let first = GroupedInterfaces::from_records(&records);
        let second = GroupedInterfaces::from_records(&records);

        assert_eq!(first, second);
    }

    #[test]
    fn one_group_per_distinct_name() {
        let records = vec![
            v4("eth0", "192.168.1.5"),
            v6("eth0", "fe80::1"),
            v4("wlan0", "192.168.1.6"),
        ];

        let grouped = GroupedInterfaces::from_records(&records);

        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_grouping() {
        let grouped = GroupedInterfaces::from_records(&[]);

        assert!(grouped.is_empty());
    }

    #[test]
    fn name_with_only_ipv6_has_empty_ipv4_slot() {
        let records = vec![v6("utun0", "fe80::2")];

        let grouped = GroupedInterfaces::from_records(&records);

        let group = grouped.get("utun0").unwrap();
        assert!(group.ipv4.is_none());
        assert_eq!(group.ipv6.len(), 1);
    }
}

mod stats {
    use super::*;

    #[test]
    fn counts_partition_the_input() {
        let records = vec![
            v4("eth0", "192.168.1.5"),
            v6("eth0", "fe80::1"),
            v4("lo", "127.0.0.1"),
            v6("wlan0", "2001:db8::1"),
        ];

        let stats = NetworkStats::collect(&records, Platform::Linux);

        assert_eq!(stats.ipv4_count, 2);
        assert_eq!(stats.ipv6_count, 2);
        assert_eq!(stats.ipv4_count + stats.ipv6_count, records.len());
    }

    #[test]
    fn counts_are_over_raw_input_not_grouped_view() {
        // Duplicate IPv4 records for one name are dropped by grouping but
        // still counted here.
        let records = vec![v4("eth0", "192.168.1.5"), v4("eth0", "192.168.2.5")];

        let stats = NetworkStats::collect(&records, Platform::Linux);

        assert_eq!(stats.ipv4_count, 2);
    }

    #[test]
    fn interface_types_is_the_set_of_distinct_names() {
        let records = vec![
            v4("eth0", "192.168.1.5"),
            v6("eth0", "fe80::1"),
            v4("wlan0", "192.168.1.6"),
        ];

        let stats = NetworkStats::collect(&records, Platform::Linux);

        assert_eq!(stats.interface_types.len(), 2);
        assert!(stats.interface_types.contains("eth0"));
        assert!(stats.interface_types.contains("wlan0"));
    }

    #[test]
    fn has_vpn_true_when_any_name_matches() {
        let records = vec![v4("eth0", "192.168.1.5"), v4("wg0", "10.10.0.2")];

        let stats = NetworkStats::collect(&records, Platform::Linux);

        assert!(stats.has_vpn);
    }

    #[test]
    fn has_vpn_considers_ipv6_only_interfaces() {
        // VPN-likeness is about names, regardless of family.
        let records = vec![v4("eth0", "192.168.1.5"), v6("tun0", "fe80::2")];

        let stats = NetworkStats::collect(&records, Platform::Linux);

        assert!(stats.has_vpn);
    }

    #[test]
    fn has_vpn_false_when_no_name_matches() {
        let records = vec![v4("eth0", "192.168.1.5"), v4("wlan0", "192.168.1.6")];

        let stats = NetworkStats::collect(&records, Platform::Linux);

        assert!(!stats.has_vpn);
    }

    #[test]
    fn has_vpn_false_on_unknown_platform() {
        let records = vec![v4("tun0", "10.8.0.2"), v4("eth0", "192.168.1.5")];

        let stats = NetworkStats::collect(&records, Platform::Unknown);

        assert!(!stats.has_vpn);
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        let stats = NetworkStats::collect(&[], Platform::Linux);

        assert_eq!(stats.ipv4_count, 0);
        assert_eq!(stats.ipv6_count, 0);
        assert!(stats.interface_types.is_empty());
        assert!(!stats.has_vpn);
    }
}

mod summary {
    use super::*;

    #[test]
    fn timestamp_is_iso8601() {
        let records = vec![v4("eth0", "192.168.1.5")];

        let summary = classify_at(&records, Platform::Linux, noon()).unwrap();

        assert_eq!(summary.checked_at, "2024-05-17T12:00:00Z");
    }

    #[test]
    fn external_ip_absent_by_default() {
        let records = vec![v4("eth0", "192.168.1.5")];

        let summary = classify_at(&records, Platform::Linux, noon()).unwrap();

        assert!(summary.external_ip.is_none());
    }

    #[test]
    fn with_external_ip_attaches_field() {
        let records = vec![v4("eth0", "192.168.1.5")];

        let summary = classify_at(&records, Platform::Linux, noon())
            .unwrap()
            .with_external_ip("203.0.113.7");

        assert_eq!(summary.external_ip.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn classify_uses_injected_clock() {
        struct FixedClock;

        impl Clock for FixedClock {
            fn now(&self) -> chrono::DateTime<Utc> {
                Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap()
            }
        }

        let records = vec![v4("eth0", "192.168.1.5")];

        let summary = classify(&records, Platform::Linux, &FixedClock).unwrap();

        assert_eq!(summary.checked_at, "2030-01-02T03:04:05Z");
    }

    #[test]
    fn input_records_are_not_mutated() {
        let records = vec![v4("eth0", "192.168.1.5"), v6("eth0", "fe80::1")];
        let before = records.clone();

        let _ = classify_at(&records, Platform::Linux, noon()).unwrap();

        assert_eq!(records, before);
    }

    #[test]
    fn summary_is_structurally_equal_across_runs() {
        let records = vec![
            v4("eth0", "192.168.1.5"),
            v6("eth0", "fe80::1"),
            v4("wg0", "10.10.0.2"),
        ];

        let first = classify_at(&records, Platform::Linux, noon()).unwrap();
        let second = classify_at(&records, Platform::Linux, noon()).unwrap();

        assert_eq!(first, second);
    }
}

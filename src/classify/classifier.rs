//! The classification operation.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::network::RawInterfaceRecord;
use crate::time::Clock;

use super::{ClassifyError, GroupedInterfaces, NetworkStats, NetworkSummary, Platform};
use super::summary::PrimaryInterface;

/// Classifies the full record list into a [`NetworkSummary`].
///
/// A pure function of `(records, platform)` except for the timestamp
/// taken from `clock`. The input is never mutated; nothing is discarded
/// up front, every step filters for its own purpose.
///
/// # Errors
///
/// Returns [`ClassifyError::NoPrimaryInterface`] when no non-loopback
/// IPv4 record matches the platform's selection rule. This aborts the
/// call with no partial result.
pub fn classify(
    records: &[RawInterfaceRecord],
    platform: Platform,
    clock: &impl Clock,
) -> Result<NetworkSummary, ClassifyError> {
    classify_at(records, platform, clock.now())
}

/// Classifies with an explicit snapshot time.
///
/// # Errors
///
/// Returns [`ClassifyError::NoPrimaryInterface`] when no candidate
/// qualifies as primary.
pub fn classify_at(
    records: &[RawInterfaceRecord],
    platform: Platform,
    taken_at: DateTime<Utc>,
) -> Result<NetworkSummary, ClassifyError> {
    let primary = select_primary(records, platform)?;

    Ok(NetworkSummary {
        primary: PrimaryInterface::from(primary),
        interfaces: GroupedInterfaces::from_records(records),
        stats: NetworkStats::collect(records, platform),
        external_ip: None,
        checked_at: taken_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Selects the primary interface record.
///
/// A single linear scan keeps the first-in-input-order semantics
/// explicit: the first IPv4, non-loopback record that qualifies wins.
/// Windows qualifies any non-VPN-like name; other platforms require the
/// fixed platform default name.
fn select_primary(
    records: &[RawInterfaceRecord],
    platform: Platform,
) -> Result<&RawInterfaceRecord, ClassifyError> {
    for record in records {
        if !record.is_ipv4() || record.is_loopback() {
            continue;
        }

        let qualifies = match platform.default_primary_name() {
            None => !platform.is_vpn_like(&record.name),
            Some(default) => record.name == default,
        };

        if qualifies {
            return Ok(record);
        }
    }

    Err(ClassifyError::NoPrimaryInterface { platform })
}

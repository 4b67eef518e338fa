//! Rendering of the classification result.
//!
//! Two shapes: machine-readable JSON for scripting, and a plain text
//! report for humans. Neither includes the `external_ip` field when no
//! echo service answered.

use std::fmt;

use thiserror::Error;

use crate::classify::NetworkSummary;

/// Output format for the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// Human-readable text report.
    Text,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Error type for rendering failures.
#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON serialization failed.
    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders the summary in the requested format.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if JSON serialization fails.
pub fn render(summary: &NetworkSummary, format: Format) -> Result<String, OutputError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(summary)?),
        Format::Text => Ok(TextReport(summary).to_string()),
    }
}

/// Display adapter producing the human-readable report.
struct TextReport<'a>(&'a NetworkSummary);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;

        writeln!(f, "Network snapshot taken at {}", summary.checked_at)?;
        writeln!(f)?;

        writeln!(f, "Primary interface")?;
        writeln!(f, "  name:     {}", summary.primary.name)?;
        writeln!(
            f,
            "  address:  {} ({})",
            summary.primary.address, summary.primary.family
        )?;
        if let Some(ref mac) = summary.primary.mac {
            writeln!(f, "  mac:      {mac}")?;
        }
        writeln!(f, "  netmask:  {}", summary.primary.netmask)?;
        writeln!(f, "  cidr:     {}", summary.primary.cidr)?;
        writeln!(f)?;

        match summary.external_ip {
            Some(ref ip) => writeln!(f, "External IP: {ip}")?,
            None => writeln!(f, "External IP: unavailable")?,
        }
        writeln!(f)?;

        writeln!(f, "Interfaces ({})", summary.interfaces.len())?;
        for (name, group) in summary.interfaces.iter() {
            writeln!(f, "  {name}")?;
            if let Some(ref ipv4) = group.ipv4 {
                writeln!(f, "    IPv4: {}", ipv4.cidr)?;
            }
            for ipv6 in &group.ipv6 {
                writeln!(f, "    IPv6: {}", ipv6.cidr)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Stats")?;
        writeln!(f, "  IPv4 records: {}", summary.stats.ipv4_count)?;
        writeln!(f, "  IPv6 records: {}", summary.stats.ipv6_count)?;
        writeln!(
            f,
            "  VPN-like interface present: {}",
            if summary.stats.has_vpn { "yes" } else { "no" }
        )
    }
}

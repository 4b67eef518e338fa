//! Platform heuristic tables for classification.

use std::fmt;

/// The platform family the classifier is running on.
///
/// # Design Decision
///
/// Heuristics are plain lookup tables over this closed enum, checked
/// exhaustively at compile time. An unrecognized target maps to
/// [`Platform::Unknown`], which carries no VPN identifiers and falls back
/// to the "eth0" default name; it is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows family.
    Windows,
    /// Apple family (macOS).
    MacOs,
    /// Linux family.
    Linux,
    /// Any other platform.
    Unknown,
}

impl Platform {
    /// Returns the platform family of the current build target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    /// Name substrings (lowercase) marking an interface as VPN-like.
    #[must_use]
    pub const fn vpn_identifiers(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["vpn", "tap", "tun"],
            Self::MacOs => &["utun", "ppp"],
            Self::Linux => &["tun", "vpn", "wg"],
            Self::Unknown => &[],
        }
    }

    /// The fixed interface name preferred as primary, if the platform has one.
    ///
    /// Windows has no fixed name; it selects the first non-VPN-like
    /// candidate instead.
    #[must_use]
    pub const fn default_primary_name(self) -> Option<&'static str> {
        match self {
            Self::Windows => None,
            Self::MacOs => Some("en0"),
            Self::Linux | Self::Unknown => Some("eth0"),
        }
    }

    /// Returns true if the interface name matches a VPN identifier for
    /// this platform (case-insensitive substring containment).
    #[must_use]
    pub fn is_vpn_like(self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.vpn_identifiers()
            .iter()
            .any(|id| lowered.contains(id))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

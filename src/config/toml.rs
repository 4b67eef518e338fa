//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,

    /// Classification configuration section
    #[serde(default)]
    pub classify: ClassifySection,

    /// External IP lookup configuration section
    #[serde(default)]
    pub external_ip: ExternalIpSection,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "json" or "text"
    pub format: Option<String>,
}

/// Classification configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifySection {
    /// Platform override: "windows", "macos", "linux", or "unknown"
    pub platform: Option<String>,
}

/// External IP lookup configuration section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalIpSection {
    /// Whether to query echo services at all (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Echo endpoint URLs (empty = built-in defaults)
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// HTTP timeout in seconds
    pub timeout: Option<u64>,
}

impl Default for ExternalIpSection {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoints: Vec::new(),
            timeout: None,
        }
    }
}

const fn default_enabled() -> bool {
    true
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Netcheck Configuration File

[output]
# Output format: "json" or "text" (default: text)
# format = "text"

[classify]
# Override platform detection for classification heuristics.
# Accepted values: "windows", "macos", "linux", "unknown"
# platform = "linux"

[external_ip]
# Query public echo services for the externally observed IP (default: true)
enabled = true

# Echo endpoint URLs. The first service to answer wins.
# Note: CLI --endpoint values REPLACE these entirely (not merged)
# endpoints = ["https://ifconfig.me", "https://api.ipify.org", "https://icanhazip.com"]

# HTTP timeout in seconds (default: 10)
# timeout = 10
"#
    .to_string()
}

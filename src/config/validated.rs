//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::classify::Platform;
use crate::external::DEFAULT_ENDPOINTS;
use crate::output::Format;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config. The function validates all inputs and returns errors for
/// invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Output format
    pub format: Format,

    /// Platform used for classification heuristics
    pub platform: Platform,

    /// Whether to query echo services for the external IP
    pub external_ip: bool,

    /// Echo endpoint URLs to query
    pub endpoints: Vec<Url>,

    /// HTTP timeout for the external IP lookup
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ format: {}, platform: {}, external_ip: {}, endpoints: {}, timeout: {}s }}",
            self.format,
            self.platform,
            self.external_ip,
            self.endpoints.len(),
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An endpoint URL is invalid
    /// - The timeout is zero
    /// - Format or platform values are unrecognized
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let format = Self::resolve_format(cli, toml)?;
        let platform = Self::resolve_platform(cli, toml)?;
        let endpoints = Self::resolve_endpoints(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        // The probe is skipped if either side disables it (OR semantics)
        let external_ip = !cli.no_external_ip && toml.is_none_or(|t| t.external_ip.enabled);

        Ok(Self {
            format,
            platform,
            external_ip,
            endpoints,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Format, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        // Fall back to TOML, then the built-in default
        let format_str = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_format(format_str)
    }

    fn resolve_platform(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Platform, ConfigError> {
        // CLI takes precedence
        if let Some(platform) = cli.platform {
            return Ok(platform.into());
        }

        // Fall back to TOML, then the build target
        if let Some(platform_str) = toml.and_then(|t| t.classify.platform.as_deref()) {
            return parse_platform(platform_str);
        }

        Ok(Platform::current())
    }

    fn resolve_endpoints(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Vec<Url>, ConfigError> {
        // CLI endpoints REPLACE TOML endpoints entirely
        let raw: Vec<&str> = if cli.endpoints.is_empty() {
            match toml {
                Some(t) if !t.external_ip.endpoints.is_empty() => {
                    t.external_ip.endpoints.iter().map(String::as_str).collect()
                }
                _ => DEFAULT_ENDPOINTS.to_vec(),
            }
        } else {
            cli.endpoints.iter().map(String::as_str).collect()
        };

        raw.into_iter()
            .map(|s| {
                Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
                    url: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.external_ip.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_format(s: &str) -> Result<Format, ConfigError> {
    match s.to_lowercase().as_str() {
        "json" => Ok(Format::Json),
        "text" | "plain" => Ok(Format::Text),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}

fn parse_platform(s: &str) -> Result<Platform, ConfigError> {
    match s.to_lowercase().as_str() {
        "windows" | "win32" => Ok(Platform::Windows),
        "macos" | "darwin" => Ok(Platform::MacOs),
        "linux" => Ok(Platform::Linux),
        "unknown" | "other" => Ok(Platform::Unknown),
        _ => Err(ConfigError::InvalidPlatform {
            value: s.to_string(),
        }),
    }
}

//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::classify::Platform;
use crate::output::Format;

/// Netcheck: Local Network Configuration Snapshot
///
/// Inspects the host's network interfaces, classifies them, and
/// optionally reports the externally observed public IP address.
#[derive(Debug, Parser)]
#[command(name = "netcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Override platform detection for classification heuristics
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Skip the external IP lookup
    #[arg(long = "no-external-ip")]
    pub no_external_ip: bool,

    /// IP echo endpoint URL (can be specified multiple times)
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoints: Vec<String>,

    /// HTTP timeout for the external IP lookup, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for netcheck
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "netcheck.toml")]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,
    /// Human-readable text report
    #[value(name = "text")]
    Text,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
}

/// Platform argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// Windows family heuristics
    #[value(name = "windows")]
    Windows,
    /// Apple family heuristics
    #[value(name = "macos")]
    MacOs,
    /// Linux family heuristics
    #[value(name = "linux")]
    Linux,
    /// No VPN identifiers, "eth0" default name
    #[value(name = "unknown")]
    Unknown,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Self::Windows,
            PlatformArg::MacOs => Self::MacOs,
            PlatformArg::Linux => Self::Linux,
            PlatformArg::Unknown => Self::Unknown,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}

//! Configuration layer for netcheck.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! For the endpoint list, CLI `--endpoint` values **replace** TOML endpoints
//! entirely (not merged). This is intentional "replace" semantics.
//!
//! # Boolean Flag Semantics
//!
//! `--no-external-ip` uses OR semantics with TOML `external_ip.enabled = false`:
//! the probe is skipped if either side disables it. The CLI flag can only
//! disable, never re-enable.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, FormatArg, PlatformArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};

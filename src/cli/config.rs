//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in
//! a config file; command-line flags take precedence:
//!
//! ```toml
//! # massbank.toml
//! [validation]
//! legacy = false
//! parallel = true
//!
//! [splash]
//! enabled = true
//! url = "https://splash.fiehnlab.ucdavis.edu/splash/it"
//! timeout_ms = 5000
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for massbank.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Record validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// SPLASH checksum verification settings.
    #[serde(default)]
    pub splash: SplashConfig,
}

/// Settings for record validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Relax checks for legacy records.
    pub legacy: Option<bool>,

    /// Validate files on all cores.
    pub parallel: Option<bool>,
}

/// Settings for SPLASH verification.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplashConfig {
    /// Verify PK$SPLASH values against the SPLASH service.
    pub enabled: Option<bool>,

    /// SPLASH service endpoint.
    pub url: Option<String>,

    /// Time allowed per record before verification is skipped.
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

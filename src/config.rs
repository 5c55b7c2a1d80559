//! Configuration
//!
//! Built-in defaults, overridden by an optional TOML file, overridden by
//! command-line flags (see [`crate::cli::Cli::apply`]).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::i18n::Locale;
use crate::launcher::{AllowList, LaunchError, GOOGLE_URL};
use crate::script::ScriptLimits;

/// System names offered at boot.
pub const SYSTEM_NAMES: [&str; 4] = ["HeliosOS", "AstraOS", "NebulaOS", "OrionOS"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<LaunchError> for ConfigError {
    fn from(e: LaunchError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed system name; the user picks one at boot when unset.
    pub system_name: Option<String>,
    /// Fixed locale; the user picks one at boot when unset.
    pub locale: Option<Locale>,
    pub accounts_file: PathBuf,
    /// Pause per boot progress step.
    pub boot_delay_ms: u64,
    pub scripts: ScriptsConfig,
    pub launcher: LauncherConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptsConfig {
    pub enabled: bool,
    pub max_statements: u64,
    pub max_output_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    pub enabled: bool,
    pub allowed_urls: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_name: None,
            locale: None,
            accounts_file: PathBuf::from("users.txt"),
            boot_delay_ms: 500,
            scripts: ScriptsConfig::default(),
            launcher: LauncherConfig::default(),
        }
    }
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        let limits = ScriptLimits::default();
        Self {
            enabled: false,
            max_statements: limits.max_statements,
            max_output_bytes: limits.max_output_bytes,
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_urls: vec![GOOGLE_URL.to_string()],
        }
    }
}

impl Config {
    /// Defaults, or the given file layered over them.
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = tokio::fs::read_to_string(path).await.map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.system_name {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("system_name must not be empty".to_string()));
            }
        }
        if self.scripts.max_statements == 0 {
            return Err(ConfigError::Invalid("scripts.max_statements must be positive".to_string()));
        }
        AllowList::new(&self.launcher.allowed_urls)?;
        Ok(())
    }

    pub fn script_limits(&self) -> ScriptLimits {
        ScriptLimits {
            max_statements: self.scripts.max_statements,
            max_output_bytes: self.scripts.max_output_bytes,
        }
    }

    /// The launcher allow-list; empty when launching is disabled.
    pub fn allow_list(&self) -> Result<AllowList, ConfigError> {
        if !self.launcher.enabled {
            return Ok(AllowList::empty());
        }
        Ok(AllowList::new(&self.launcher.allowed_urls)?)
    }
}

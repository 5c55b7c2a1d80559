use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::i18n::Locale;

#[derive(Debug, Clone, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(&self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Interactive console over an in-memory namespace.
#[derive(Parser, Debug, Clone)]
#[command(name = "helios", version)]
pub struct Cli {
    /// TOML config file
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Skip the system name menu
    #[clap(long)]
    pub system_name: Option<String>,

    /// Skip the language menu
    #[clap(long, value_enum)]
    pub locale: Option<Locale>,

    /// Account records file
    #[clap(long)]
    pub accounts_file: Option<PathBuf>,

    /// Pause per boot progress step, in milliseconds
    #[clap(long)]
    pub boot_delay_ms: Option<u64>,

    /// Let `run` execute files with the restricted executor
    #[clap(long)]
    pub enable_scripts: bool,

    /// Refuse every `open` request
    #[clap(long)]
    pub disable_launcher: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Layer the flags that were given over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(name) = &self.system_name {
            config.system_name = Some(name.clone());
        }
        if let Some(locale) = self.locale {
            config.locale = Some(locale);
        }
        if let Some(path) = &self.accounts_file {
            config.accounts_file = path.clone();
        }
        if let Some(delay) = self.boot_delay_ms {
            config.boot_delay_ms = delay;
        }
        if self.enable_scripts {
            config.scripts.enabled = true;
        }
        if self.disable_launcher {
            config.launcher.enabled = false;
        }
    }
}

//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File the report is saved to when no other path is given
pub const DEFAULT_REPORT_FILE: &str = "pcs.txt";

/// PC catalog configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `Save report to file?` writes the report
    pub report_file: Option<String>,

    /// Default output format for `pccat report`
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/pccat/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Environment variables
        config.merge(Self::from_env());

        config
    }

    /// Parse a single config file, ignoring missing or malformed files
    pub fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
                None
            }
        }
    }

    fn from_env() -> Config {
        Config {
            report_file: std::env::var("PCCAT_REPORT_FILE").ok(),
            default_format: std::env::var("PCCAT_FORMAT").ok(),
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pccat")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.report_file.is_some() {
            self.report_file = other.report_file;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Get the report file path, falling back to `pcs.txt`
    pub fn report_file(&self) -> PathBuf {
        PathBuf::from(
            self.report_file
                .as_deref()
                .unwrap_or(DEFAULT_REPORT_FILE),
        )
    }
}

//! Configuration handling for the application form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default wait before the simulated backend accepts the application
const DEFAULT_PROCESSING_DELAY_MS: u64 = 1000;
/// Default wait between acceptance and the confirmation notice
const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 3000;
/// Default upload ceiling (5 MiB)
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Environment override for the processing delay
const PROCESSING_DELAY_ENV: &str = "SWIFTCAP_PROCESSING_DELAY_MS";

/// User configuration for the application form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplyConfig {
    /// Milliseconds the simulated backend spends processing
    pub processing_delay_ms: Option<u64>,
    /// Milliseconds before the confirmation is shown
    pub confirmation_delay_ms: Option<u64>,
    /// Maximum accepted size for attached statements
    pub max_file_bytes: Option<u64>,
    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl ApplyConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "swiftcap", "swiftcap-apply")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides.
    ///
    /// Runs before logging is set up, so problems with the overrides come
    /// back as warnings for the caller to log.
    pub fn load() -> Result<(Self, Vec<String>)> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        let warnings = config
            .apply_processing_delay_override(std::env::var(PROCESSING_DELAY_ENV).ok())
            .into_iter()
            .collect();

        Ok((config, warnings))
    }

    /// Apply the processing delay override, returning a warning if it does
    /// not parse
    fn apply_processing_delay_override(&mut self, value: Option<String>) -> Option<String> {
        let value = value?;
        match value.trim().parse::<u64>() {
            Ok(ms) => {
                self.processing_delay_ms = Some(ms);
                None
            }
            Err(_) => Some(format!("Ignoring invalid {PROCESSING_DELAY_ENV}={value}")),
        }
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(
            self.processing_delay_ms
                .unwrap_or(DEFAULT_PROCESSING_DELAY_MS),
        )
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(
            self.confirmation_delay_ms
                .unwrap_or(DEFAULT_CONFIRMATION_DELAY_MS),
        )
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes.unwrap_or(DEFAULT_MAX_FILE_BYTES)
    }
}

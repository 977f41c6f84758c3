//! Configuration management for the whosin application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory. Only the live dashboard is configurable today; all other
//! behavior is fixed by the attendance rules themselves.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use whosin::libs::config::Config;
//!
//! let config = Config::read()?;
//! let watch = config.watch.unwrap_or_default();
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Live dashboard settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WatchConfig {
    /// Seconds between dashboard re-renders. Clamped to at least one so
    /// open-session counters keep moving.
    pub refresh_interval: u64,

    /// Whether to run the midnight sweep once when the dashboard starts.
    /// The sweep is idempotent, so leaving this on is always safe.
    pub sweep_on_start: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            refresh_interval: 1,
            sweep_on_start: true,
        }
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| msg_error_anyhow!(e))?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| msg_error_anyhow!(e))?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Removes the configuration file if it exists.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| msg_error_anyhow!(e))?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard for the dashboard settings.
    pub fn init() -> Result<Self> {
        let mut config = Config::read().unwrap_or_default();
        let current = config.watch.clone().unwrap_or_default();

        let refresh_interval: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRefreshInterval.to_string())
            .default(current.refresh_interval)
            .interact_text()?;

        let sweep_on_start = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSweepOnStart.to_string())
            .default(current.sweep_on_start)
            .interact()?;

        config.watch = Some(WatchConfig {
            refresh_interval: refresh_interval.max(1),
            sweep_on_start,
        });
        Ok(config)
    }
}

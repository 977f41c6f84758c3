//! Platform data directory resolution.
//!
//! The database and the configuration file share one per-user directory.
//! A kiosk machine often runs under a dedicated account, so everything is
//! keyed off that account's home.

use std::env::consts::OS;
use std::env::var;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "whosin";

#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    /// Resolves a file inside the data directory, creating the directory on
    /// first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf, Box<dyn Error>> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

//! Path management for daybudget
//!
//! ## Path Resolution Order
//!
//! 1. `DAYBUDGET_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/daybudget` on Linux,
//!    `~/Library/Application Support/daybudget` on macOS, `%APPDATA%` on
//!    Windows)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "DAYBUDGET_CONFIG_DIR";

/// Manages the paths daybudget reads its configuration from
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    base_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => ProjectDirs::from("", "", "daybudget")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Default session configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Whether a config file has been written
    pub fn is_initialized(&self) -> bool {
        self.config_file().exists()
    }
}

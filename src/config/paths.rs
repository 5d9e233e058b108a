//! Path management for maestro-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `MAESTRO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/maestro-cli` or `~/.config/maestro-cli`
//! 3. Windows: `%APPDATA%\maestro-cli`

use std::path::PathBuf;

use crate::error::MaestroError;

/// Manages all paths used by maestro-cli
#[derive(Debug, Clone)]
pub struct MaestroPaths {
    /// Base directory for all maestro-cli data
    base_dir: PathBuf,
}

impl MaestroPaths {
    /// Create a new MaestroPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, MaestroError> {
        let base_dir = if let Ok(custom) = std::env::var("MAESTRO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create MaestroPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/maestro-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/maestro-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the schedule file
    pub fn schedule_file(&self) -> PathBuf {
        self.data_dir().join("schedule.txt")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MaestroError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MaestroError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MaestroError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MaestroError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("maestro-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MaestroError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MaestroError::Io("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("maestro-cli"))
}

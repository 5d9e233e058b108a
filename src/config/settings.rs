//! User settings for maestro-cli
//!
//! Manages user preferences: the monthly concert budget cap and whether the
//! weekly calendar is printed after every command.

use serde::{Deserialize, Serialize};

use super::paths::MaestroPaths;
use crate::error::MaestroResult;
use crate::services::budget::DEFAULT_MONTHLY_CAP;
use crate::storage::file_io::{read_json, write_json_atomic};

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> i64 {
    DEFAULT_MONTHLY_CAP
}

/// User settings persisted as JSON in the base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Monthly concert budget cap
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: i64,

    /// Print the weekly calendar after every command
    #[serde(default)]
    pub calendar_auto_print: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            calendar_auto_print: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &MaestroPaths) -> MaestroResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            read_json(path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MaestroPaths) -> MaestroResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_budget, DEFAULT_MONTHLY_CAP);
        assert!(!settings.calendar_auto_print);
    }

    #[test]
    fn test_load_or_create_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MaestroPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.monthly_budget, DEFAULT_MONTHLY_CAP);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MaestroPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::load_or_create(&paths).unwrap();
        settings.monthly_budget = 75;
        settings.calendar_auto_print = true;
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.monthly_budget, 75);
        assert!(reloaded.calendar_auto_print);
    }
}

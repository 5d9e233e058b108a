//! Storage layer for maestro-cli
//!
//! Provides flat-file persistence for the schedule with atomic writes, plus
//! the JSON helpers used by the settings file.

pub mod file_io;
pub mod schedule;

pub use file_io::{read_json, read_lines, write_json_atomic, write_lines_atomic};
pub use schedule::ScheduleRepository;

use crate::config::paths::MaestroPaths;
use crate::error::MaestroResult;
use crate::models::Entry;

/// Main storage coordinator
pub struct Storage {
    paths: MaestroPaths,
    pub schedule: ScheduleRepository,
}

impl Storage {
    /// Create a new Storage instance, ensuring the data directories exist
    pub fn new(paths: MaestroPaths) -> MaestroResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            schedule: ScheduleRepository::new(paths.schedule_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &MaestroPaths {
        &self.paths
    }

    /// Load the persisted schedule entries and any per-line warnings
    pub fn load_schedule(&self) -> MaestroResult<(Vec<Entry>, Vec<String>)> {
        self.schedule.load()
    }

    /// Save serialized entries to the schedule file
    pub fn save_schedule(&self, lines: &[String]) -> MaestroResult<()> {
        self.schedule.save(lines)
    }
}

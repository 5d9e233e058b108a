//! Schedule file repository
//!
//! Persists the entry collection as one line per entry in the flat-file
//! format. Malformed lines are reported and skipped so one bad line never
//! takes the rest of the schedule down with it.

use std::path::PathBuf;

use super::file_io::{read_lines, write_lines_atomic};
use crate::error::MaestroResult;
use crate::models::Entry;

/// Repository for the schedule file
pub struct ScheduleRepository {
    path: PathBuf,
}

impl ScheduleRepository {
    /// Create a repository backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all entries from the schedule file
    ///
    /// Returns the parsed entries plus a warning per malformed line. A
    /// missing file yields an empty schedule.
    pub fn load(&self) -> MaestroResult<(Vec<Entry>, Vec<String>)> {
        let lines = read_lines(&self.path)?;

        let mut entries = Vec::with_capacity(lines.len());
        let mut warnings = Vec::new();
        for (number, line) in lines.iter().enumerate() {
            match Entry::from_line(line) {
                Ok(entry) => entries.push(entry),
                Err(err) => warnings.push(format!(
                    "Skipped line {} of {}: {}",
                    number + 1,
                    self.path.display(),
                    err
                )),
            }
        }
        Ok((entries, warnings))
    }

    /// Save serialized entries to the schedule file
    pub fn save(&self, lines: &[String]) -> MaestroResult<()> {
        write_lines_atomic(&self.path, lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ScheduleRepository::new(temp_dir.path().join("schedule.txt"));
        let (entries, warnings) = repo.load().unwrap();
        assert!(entries.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ScheduleRepository::new(temp_dir.path().join("schedule.txt"));

        let lines = vec![
            "XT/fawpeifwe/02-12-2019".to_string(),
            "XP/apiejfpwiefw/03-12-2019 1500/03-12-2019 1800".to_string(),
            "XC/halloween/04-12-2019 1600/04-12-2019 1930/5".to_string(),
        ];
        repo.save(&lines).unwrap();

        let (entries, warnings) = repo.load().unwrap();
        assert!(warnings.is_empty());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::Todo);
        assert_eq!(entries[2].cost, Some(5));
        assert_eq!(
            entries.iter().map(Entry::to_line).collect::<Vec<_>>(),
            lines
        );
    }

    #[test]
    fn test_malformed_lines_are_skipped_with_warnings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("schedule.txt");
        fs::write(
            &path,
            "XT/good/02-12-2019\nnot an entry\nXL/also good/03-12-2019 1400/03-12-2019 1500\n",
        )
        .unwrap();

        let repo = ScheduleRepository::new(path);
        let (entries, warnings) = repo.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("line 2"));
    }
}

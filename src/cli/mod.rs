//! Command layer for maestro-cli
//!
//! Tokenizes one input line into a command word plus its continuation and
//! dispatches to the handlers. After every mutating command the schedule is
//! sorted, saved, and audited; a failed save is reported but the in-memory
//! change is deliberately kept rather than thrown away.

pub mod annotation;
pub mod budget;
pub mod entry;
pub mod help;
pub mod query;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::display;
use crate::error::MaestroError;
use crate::models::EntryDate;
use crate::services::Schedule;
use crate::storage::Storage;

/// Whether the session keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// One interactive session: the schedule, its storage, and user settings
pub struct Session {
    pub(crate) schedule: Schedule,
    pub(crate) storage: Storage,
    pub(crate) settings: Settings,
    pub(crate) audit: AuditLogger,

    /// The day the session started; "today" for reminders and free days
    pub(crate) today: NaiveDate,

    /// First day of the calendar page currently shown
    pub(crate) calendar_start: EntryDate,
}

impl Session {
    /// Create a session around a loaded schedule
    pub fn new(
        schedule: Schedule,
        storage: Storage,
        settings: Settings,
        audit: AuditLogger,
        today: NaiveDate,
    ) -> Self {
        Self {
            schedule,
            storage,
            settings,
            audit,
            today,
            calendar_start: EntryDate::date_only(today),
        }
    }

    /// The schedule owned by this session
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Execute one input line
    pub fn dispatch(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Continue;
        }

        let (command, continuation) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let result = match command {
            "help" => {
                help::print_help(continuation);
                Ok(())
            }
            "list" => query::handle_list(self),
            "find" => query::handle_find(self, continuation),
            "view" => query::handle_view(self, continuation),
            "check" => query::handle_check(self),
            "reminder" => query::handle_reminder(self, continuation),
            "todo" => entry::handle_todo(self, continuation),
            "lesson" | "concert" | "practice" | "exam" | "recital" => {
                entry::handle_add_timed(self, command, continuation)
            }
            "done" => entry::handle_done(self, continuation),
            "delete" => entry::handle_delete(self, continuation),
            "edit" => entry::handle_edit(self, continuation),
            "reschedule" => entry::handle_reschedule(self, continuation),
            "calendar" => query::handle_calendar(self, continuation),
            "budget" => budget::handle_budget(self, continuation),
            "goal" => annotation::handle_goal(self, continuation),
            "contact" => annotation::handle_contact(self, continuation),
            "checklist" => annotation::handle_checklist(self, continuation),
            "bye" | "exit" => return Outcome::Exit,
            _ => {
                println!("I don't know that command. Try 'help'.");
                Ok(())
            }
        };

        if let Err(err) = result {
            report_error(&err);
        }

        if self.settings.calendar_auto_print && command != "calendar" {
            println!();
            print!(
                "{}",
                display::render_week(&self.schedule, self.calendar_start)
            );
        }

        Outcome::Continue
    }

    /// Finish a mutating command: sort, persist, and audit
    ///
    /// A save failure is reported as a warning and the in-memory change
    /// survives; losing the user's input would be worse than a stale file.
    /// Audit failures are silently dropped for the same reason.
    pub(crate) fn commit(&mut self, audit_entry: AuditEntry) {
        self.schedule.sort();
        if let Err(err) = self.storage.save_schedule(&self.schedule.to_lines()) {
            println!("Warning: could not save the schedule ({}). Your change is kept for this session.", err);
        }
        let _ = self.audit.log(&audit_entry);
    }

    /// Persist the settings file, warning on failure
    pub(crate) fn save_settings(&self) {
        if let Err(err) = self.settings.save(self.storage.paths()) {
            println!("Warning: could not save settings ({}).", err);
        }
    }
}

/// Map an error to its user-facing message
pub(crate) fn report_error(err: &MaestroError) {
    match err {
        MaestroError::DateParse(_) => println!("{}", err),
        MaestroError::EndBeforeStart => println!("An entry cannot end before it starts."),
        MaestroError::Clash { conflicting } => {
            println!("That clashes with: {}", conflicting);
        }
        MaestroError::BudgetExceeded { entry, cap } => {
            println!(
                "Adding '{}' would exceed the monthly concert budget of {}.",
                entry.description, cap
            );
        }
        MaestroError::PeriodRange(_) => {
            println!("The recurrence period must be a positive number of days.");
        }
        MaestroError::Index { target, .. } => println!("No such {}.", target),
        MaestroError::NumberFormat(text) => {
            println!("Expected a whole number, got '{}'.", text);
        }
        MaestroError::Io(_) | MaestroError::Json(_) | MaestroError::Storage(_) => {
            println!("Something went wrong: {}", err);
        }
    }
}

/// Parse a one-based entry index from user text into a zero-based index
pub(crate) fn parse_index(text: &str) -> Result<usize, MaestroError> {
    let number: usize = text
        .trim()
        .parse()
        .map_err(|_| MaestroError::NumberFormat(text.trim().to_string()))?;
    if number == 0 {
        return Err(MaestroError::NumberFormat(text.trim().to_string()));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_is_one_based() {
        assert_eq!(parse_index("1").unwrap(), 0);
        assert_eq!(parse_index(" 12 ").unwrap(), 11);
    }

    #[test]
    fn test_parse_index_rejects_garbage() {
        assert!(matches!(
            parse_index("abc"),
            Err(MaestroError::NumberFormat(_))
        ));
        assert!(matches!(
            parse_index("0"),
            Err(MaestroError::NumberFormat(_))
        ));
        assert!(matches!(
            parse_index("-2"),
            Err(MaestroError::NumberFormat(_))
        ));
    }
}

//! Schedule service
//!
//! Owns the ordered entry collection and its budget ledger, and provides the
//! scheduling operations: add with clash and budget checks, recurring add
//! with all-or-nothing rollback, delete and undo-delete, stable sorting, and
//! the reminder, free-day, date-view, and search queries.

use chrono::NaiveDate;

use super::budget::BudgetLedger;
use crate::error::{MaestroError, MaestroResult};
use crate::models::{Entry, EntryDate};

/// How far past the original start a recurring series extends
///
/// Occurrences are generated while their start lies within this many days of
/// the first occurrence, roughly one semester.
pub const RECURRENCE_HORIZON_DAYS: i64 = 112;

/// The entry collection and its budget ledger
///
/// An explicit context object passed to every command handler, so the core
/// stays testable without any process-wide state.
#[derive(Debug)]
pub struct Schedule {
    entries: Vec<Entry>,
    budget: BudgetLedger,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new(cap: i64) -> Self {
        Self {
            entries: Vec::new(),
            budget: BudgetLedger::new(cap),
        }
    }

    /// Build a schedule from entries loaded out of storage
    ///
    /// The ledger is built by scanning the loaded entries; file contents are
    /// trusted, so neither clash nor cap checks run here.
    pub fn from_entries(entries: Vec<Entry>, cap: i64) -> Self {
        let budget = BudgetLedger::from_entries(&entries, cap);
        Self { entries, budget }
    }

    /// All entries in current collection order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the schedule is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`
    pub fn entry(&self, index: usize) -> MaestroResult<&Entry> {
        self.entries
            .get(index)
            .ok_or(MaestroError::entry_index(index))
    }

    /// Get a mutable reference to the entry at `index`
    ///
    /// Used by the command layer for done-marking and annotations.
    pub fn entry_mut(&mut self, index: usize) -> MaestroResult<&mut Entry> {
        self.entries
            .get_mut(index)
            .ok_or(MaestroError::entry_index(index))
    }

    /// The budget ledger
    pub fn budget(&self) -> &BudgetLedger {
        &self.budget
    }

    /// Mutable access to the budget ledger (cap changes)
    pub fn budget_mut(&mut self) -> &mut BudgetLedger {
        &mut self.budget
    }

    /// Add one entry, enforcing interval validity, budget, and clash checks
    ///
    /// Check order matters: the interval check re-validates entries staged by
    /// a reschedule, the budget check runs before the clash scan, and a clash
    /// found after a successful budget accumulation reverts that
    /// accumulation. A rejected entry leaves no residual state anywhere. On
    /// success the entry is appended unsorted; the command layer sorts after
    /// the whole command succeeds.
    pub fn add(&mut self, entry: Entry) -> MaestroResult<()> {
        if let Some(end) = entry.end {
            if end < entry.start {
                return Err(MaestroError::EndBeforeStart);
            }
        }

        self.budget.try_add(&entry)?;

        for existing in &self.entries {
            if existing.overlaps(&entry) {
                self.budget.remove(&entry);
                return Err(MaestroError::Clash {
                    conflicting: Box::new(existing.clone()),
                });
            }
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Add a repeating series of an entry, all-or-nothing
    ///
    /// Occurrences are generated by shifting both start and end forward by
    /// `period_days` repeatedly (keeping time-of-day) while the start stays
    /// within [`RECURRENCE_HORIZON_DAYS`] of the original. Every occurrence
    /// goes through [`Schedule::add`]; if any fails, every occurrence added
    /// by this call is removed again, budget contributions included, and the
    /// original error is surfaced.
    pub fn add_recurring(&mut self, entry: Entry, period_days: i64) -> MaestroResult<()> {
        if period_days <= 0 {
            return Err(MaestroError::PeriodRange(period_days));
        }

        let horizon = entry.start.add_days(RECURRENCE_HORIZON_DAYS);
        let mut added = 0usize;
        let mut shift = 0i64;

        while entry.start.add_days(shift) <= horizon {
            let mut occurrence = entry.clone();
            occurrence.recurring = true;
            occurrence.set_start(entry.start.add_days(shift));
            if let Some(end) = entry.end {
                occurrence.set_end(end.add_days(shift));
            }

            if let Err(err) = self.add(occurrence) {
                // Roll back this call's additions; they all sit at the tail.
                for _ in 0..added {
                    if let Some(rolled_back) = self.entries.pop() {
                        self.budget.remove(&rolled_back);
                    }
                }
                return Err(err);
            }

            added += 1;
            shift += period_days;
        }

        Ok(())
    }

    /// Remove and return the entry at `index`, reverting its budget share
    pub fn delete(&mut self, index: usize) -> MaestroResult<Entry> {
        if index >= self.entries.len() {
            return Err(MaestroError::entry_index(index));
        }
        let entry = self.entries.remove(index);
        self.budget.remove(&entry);
        Ok(entry)
    }

    /// Re-insert a just-deleted entry at its prior position
    ///
    /// Skips clash and budget checks: the entry was already validated before
    /// it was removed. Only used to restore state after a failed reschedule.
    pub fn undo_delete(&mut self, index: usize, entry: Entry) {
        self.budget.restore(&entry);
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    /// Replace the description of the entry at `index`
    pub fn edit(&mut self, index: usize, description: impl Into<String>) -> MaestroResult<()> {
        let entry = self.entry_mut(index)?;
        entry.description = description.into();
        Ok(())
    }

    /// Sort entries chronologically by start instant
    ///
    /// The sort is stable: entries with equal start instants keep their
    /// relative insertion order, which keeps output deterministic.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|entry| entry.start.instant());
    }

    /// Entries starting within `days` days of `today`, inclusive
    ///
    /// Completed to-dos are excluded; everything else is fair game for a
    /// reminder.
    pub fn reminders_within(&self, today: NaiveDate, days: i64) -> Vec<&Entry> {
        let limit = today + chrono::Duration::days(days);
        self.entries
            .iter()
            .filter(|entry| {
                let date = entry.start.date();
                date >= today && date <= limit
            })
            .filter(|entry| !(entry.kind == crate::models::EntryKind::Todo && entry.is_done))
            .collect()
    }

    /// The first `count` days from `from` with nothing scheduled
    ///
    /// A day is free when no entry starts on it. Terminates because all days
    /// past the last scheduled entry are free.
    pub fn free_days(&self, from: NaiveDate, count: usize) -> Vec<NaiveDate> {
        let mut free = Vec::with_capacity(count);
        let mut day = from;
        while free.len() < count {
            let busy = self.entries.iter().any(|entry| entry.start.date() == day);
            if !busy {
                free.push(day);
            }
            day += chrono::Duration::days(1);
        }
        free
    }

    /// Entries falling on a given calendar day, with their indices
    ///
    /// An entry counts when it starts or ends on the day.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                entry.start.date() == date
                    || entry.end.map(|end| end.date() == date).unwrap_or(false)
            })
            .collect()
    }

    /// Entries whose display form contains `keyword`, with their indices
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.to_string().contains(keyword))
            .collect()
    }

    /// Serialize every entry to its persisted line form, in collection order
    pub fn to_lines(&self) -> Vec<String> {
        self.entries.iter().map(Entry::to_line).collect()
    }
}

/// Two-phase reschedule: stage new dates on a removed entry, then commit
///
/// The entry at `index` is deleted, its dates are replaced without
/// validation, and the result is re-added through the full check sequence.
/// On any failure the original dates are restored and the entry goes back to
/// its prior position, leaving observable state exactly as before the call.
pub fn reschedule(
    schedule: &mut Schedule,
    index: usize,
    new_start: EntryDate,
    new_end: EntryDate,
) -> MaestroResult<()> {
    let entry = schedule.entry(index)?;
    if !entry.kind.is_timed() {
        return Err(MaestroError::entry_index(index));
    }

    let original_start = entry.start;
    let original_end = entry.end;

    let mut staged = schedule.delete(index)?;
    staged.set_start(new_start);
    staged.set_end(new_end);

    if let Err(err) = schedule.add(staged.clone()) {
        // Restore the snapshot dates and put the entry back where it was;
        // undo_delete re-applies its ledger share.
        staged.set_start(original_start);
        if let Some(end) = original_end {
            staged.set_end(end);
        }
        schedule.undo_delete(index, staged);
        return Err(err);
    }
    Ok(())
}

//! Schedule entry model
//!
//! One record per schedulable item. The behavioral differences between kinds
//! (presence of an end date, a cost, done-tracking) are expressed as optional
//! fields plus a kind tag rather than a type hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::date::EntryDate;
use super::goal::Goal;
use crate::error::{MaestroError, MaestroResult};

/// Done flag character for a completed entry in the persisted format
const DONE_FLAG: char = 'V';

/// Done flag character for an incomplete entry in the persisted format
const NOT_DONE_FLAG: char = 'X';

/// The kind of a schedule entry, tagged by a single letter in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Single-date reminder with a completion flag
    Todo,
    Lesson,
    /// Timed entry carrying a monetary cost, gated by the monthly budget
    Concert,
    Practice,
    Exam,
    Recital,
}

impl EntryKind {
    /// The single-letter tag used in the persisted line format
    pub fn code(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Lesson => 'L',
            Self::Concert => 'C',
            Self::Practice => 'P',
            Self::Exam => 'E',
            Self::Recital => 'R',
        }
    }

    /// Resolve a kind from its single-letter tag
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'T' => Some(Self::Todo),
            'L' => Some(Self::Lesson),
            'C' => Some(Self::Concert),
            'P' => Some(Self::Practice),
            'E' => Some(Self::Exam),
            'R' => Some(Self::Recital),
            _ => None,
        }
    }

    /// Human-readable kind name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To-do",
            Self::Lesson => "Lesson",
            Self::Concert => "Concert",
            Self::Practice => "Practice",
            Self::Exam => "Exam",
            Self::Recital => "Recital",
        }
    }

    /// Check whether this kind spans a start-end interval
    ///
    /// To-dos are a single instant and are excluded from clash checking.
    pub fn is_timed(&self) -> bool {
        !matches!(self, Self::Todo)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single schedulable item
///
/// Owned exclusively by the schedule once added; mutated in place for
/// done-marking, rescheduling, and annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub description: String,
    pub is_done: bool,

    /// Start instant, or the single date for a to-do
    pub start: EntryDate,

    /// End instant; `None` iff this is a to-do
    pub end: Option<EntryDate>,

    /// Monetary cost; `Some` iff this is a concert
    pub cost: Option<i64>,

    /// Provenance tag: created as one occurrence of a repeating series.
    /// Behaviorally identical to a plain timed entry.
    #[serde(default)]
    pub recurring: bool,

    #[serde(default)]
    pub goals: Vec<Goal>,

    #[serde(default)]
    pub contacts: Vec<Contact>,

    #[serde(default)]
    pub checklist: Vec<String>,
}

impl Entry {
    /// Create a to-do reminder on a single date
    pub fn todo(description: impl Into<String>, date: EntryDate) -> Self {
        Self {
            kind: EntryKind::Todo,
            description: description.into(),
            is_done: false,
            start: date,
            end: None,
            cost: None,
            recurring: false,
            goals: Vec::new(),
            contacts: Vec::new(),
            checklist: Vec::new(),
        }
    }

    /// Create a timed entry (lesson, practice, exam, or recital)
    ///
    /// Fails with [`MaestroError::EndBeforeStart`] when the interval is
    /// inverted. Concerts are created through [`Entry::concert`] so the cost
    /// is always present.
    pub fn timed(
        kind: EntryKind,
        description: impl Into<String>,
        start: EntryDate,
        end: EntryDate,
    ) -> MaestroResult<Self> {
        if end < start {
            return Err(MaestroError::EndBeforeStart);
        }
        Ok(Self {
            kind,
            description: description.into(),
            is_done: false,
            start,
            end: Some(end),
            cost: None,
            recurring: false,
            goals: Vec::new(),
            contacts: Vec::new(),
            checklist: Vec::new(),
        })
    }

    /// Create a concert carrying a cost
    pub fn concert(
        description: impl Into<String>,
        start: EntryDate,
        end: EntryDate,
        cost: i64,
    ) -> MaestroResult<Self> {
        let mut entry = Self::timed(EntryKind::Concert, description, start, end)?;
        entry.cost = Some(cost);
        Ok(entry)
    }

    /// Mark the entry as completed
    ///
    /// Only meaningful for to-dos; the command layer checks the kind before
    /// calling.
    pub fn mark_done(&mut self) {
        self.is_done = true;
    }

    /// Replace the start date in place without re-validation
    ///
    /// Validation happens when the staged entry is re-added to the schedule,
    /// so a reschedule can be rolled back without tripping construction-time
    /// checks.
    pub fn set_start(&mut self, start: EntryDate) {
        self.start = start;
    }

    /// Replace the end date in place without re-validation
    pub fn set_end(&mut self, end: EntryDate) {
        self.end = Some(end);
    }

    /// Check whether two entries occupy intersecting time intervals
    ///
    /// Intervals are inclusive on both ends, so entries that merely touch at
    /// a boundary clash. To-dos never overlap with anything.
    pub fn overlaps(&self, other: &Entry) -> bool {
        let (Some(self_end), Some(other_end)) = (self.end, other.end) else {
            return false;
        };
        self.start <= other_end && other.start <= self_end
    }

    /// The character stored in front of the kind tag in the persisted format
    pub fn done_flag(&self) -> char {
        if self.is_done {
            DONE_FLAG
        } else {
            NOT_DONE_FLAG
        }
    }

    /// Serialize this entry to its persisted line form
    ///
    /// `XT/desc/02-12-2019`, `XP/desc/03-12-2019 1500/03-12-2019 1800`, and
    /// concerts append `/cost`.
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{}{}/{}/{}",
            self.done_flag(),
            self.kind.code(),
            self.description,
            self.start.input_string()
        );
        if let Some(end) = self.end {
            line.push('/');
            line.push_str(&end.input_string());
        }
        if let Some(cost) = self.cost {
            line.push('/');
            line.push_str(&cost.to_string());
        }
        line
    }

    /// Reconstruct an entry from its persisted line form
    pub fn from_line(line: &str) -> MaestroResult<Self> {
        let malformed = || MaestroError::Storage(format!("malformed entry line: '{}'", line));

        let fields: Vec<&str> = line.split('/').collect();
        if fields.len() < 3 {
            return Err(malformed());
        }

        let mut tag = fields[0].chars();
        let is_done = match tag.next() {
            Some(DONE_FLAG) => true,
            Some(NOT_DONE_FLAG) => false,
            _ => return Err(malformed()),
        };
        let kind = tag
            .next()
            .and_then(EntryKind::from_code)
            .ok_or_else(malformed)?;
        if tag.next().is_some() {
            return Err(malformed());
        }

        let description = fields[1].to_string();
        let mut entry = match kind {
            EntryKind::Todo => {
                if fields.len() != 3 {
                    return Err(malformed());
                }
                Entry::todo(description, EntryDate::parse(fields[2])?)
            }
            EntryKind::Concert => {
                if fields.len() != 5 {
                    return Err(malformed());
                }
                let cost: i64 = fields[4]
                    .parse()
                    .map_err(|_| MaestroError::NumberFormat(fields[4].to_string()))?;
                Entry::concert(
                    description,
                    EntryDate::parse(fields[2])?,
                    EntryDate::parse(fields[3])?,
                    cost,
                )?
            }
            _ => {
                if fields.len() != 4 {
                    return Err(malformed());
                }
                Entry::timed(
                    kind,
                    description,
                    EntryDate::parse(fields[2])?,
                    EntryDate::parse(fields[3])?,
                )?
            }
        };
        entry.is_done = is_done;
        Ok(entry)
    }

    // --- goal annotations ---

    /// Attach a goal
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Remove and return the goal at `index`
    pub fn remove_goal(&mut self, index: usize) -> MaestroResult<Goal> {
        if index >= self.goals.len() {
            return Err(MaestroError::goal_index(index));
        }
        Ok(self.goals.remove(index))
    }

    /// Replace the goal at `index`
    pub fn edit_goal(&mut self, index: usize, goal: Goal) -> MaestroResult<()> {
        let slot = self
            .goals
            .get_mut(index)
            .ok_or(MaestroError::goal_index(index))?;
        *slot = goal;
        Ok(())
    }

    /// Mark the goal at `index` as achieved
    pub fn achieve_goal(&mut self, index: usize) -> MaestroResult<&Goal> {
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(MaestroError::goal_index(index))?;
        goal.mark_achieved();
        Ok(goal)
    }

    // --- contact annotations ---

    /// Attach a contact
    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove and return the contact at `index`
    pub fn remove_contact(&mut self, index: usize) -> MaestroResult<Contact> {
        if index >= self.contacts.len() {
            return Err(MaestroError::contact_index(index));
        }
        Ok(self.contacts.remove(index))
    }

    /// Replace the contact at `index`
    pub fn edit_contact(&mut self, index: usize, contact: Contact) -> MaestroResult<()> {
        let slot = self
            .contacts
            .get_mut(index)
            .ok_or(MaestroError::contact_index(index))?;
        *slot = contact;
        Ok(())
    }

    /// Get the contact at `index`
    pub fn contact(&self, index: usize) -> MaestroResult<&Contact> {
        self.contacts
            .get(index)
            .ok_or(MaestroError::contact_index(index))
    }

    // --- checklist annotations ---

    /// Append a checklist item
    pub fn add_checklist_item(&mut self, item: impl Into<String>) {
        self.checklist.push(item.into());
    }

    /// Remove and return the checklist item at `index`
    pub fn remove_checklist_item(&mut self, index: usize) -> MaestroResult<String> {
        if index >= self.checklist.len() {
            return Err(MaestroError::checklist_index(index));
        }
        Ok(self.checklist.remove(index))
    }

    /// Replace the checklist item at `index`
    pub fn edit_checklist_item(
        &mut self,
        index: usize,
        item: impl Into<String>,
    ) -> MaestroResult<()> {
        let slot = self
            .checklist
            .get_mut(index)
            .ok_or(MaestroError::checklist_index(index))?;
        *slot = item.into();
        Ok(())
    }
}

impl fmt::Display for Entry {
    /// One deterministic display form per kind, mirrored by the list view
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.done_flag(),
            self.kind.code(),
            self.description
        )?;
        match self.end {
            Some(end) => {
                write!(
                    f,
                    " START: {} END: {}",
                    self.start.display_string(),
                    end.display_string()
                )?;
            }
            None => {
                write!(f, " DATE: {}", self.start.display_string())?;
            }
        }
        if let Some(cost) = self.cost {
            write!(f, " COST: {}", cost)?;
        }
        Ok(())
    }
}

//! Entry display formatting
//!
//! Formats entries for terminal output: the full list table, search results,
//! reminders, and free-day reports.

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::models::Entry;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Done")]
    done: char,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

impl EntryRow {
    fn new(index: usize, entry: &Entry) -> Self {
        let when = match entry.end {
            Some(end) => format!(
                "{} - {}",
                entry.start.display_string(),
                end.display_string()
            ),
            None => entry.start.display_string(),
        };
        Self {
            // One-based for the user; every command takes these indices.
            index: index + 1,
            kind: entry.kind.label(),
            done: entry.done_flag(),
            description: entry.description.clone(),
            when,
            cost: entry.cost.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

/// Format the full entry list as a table
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "The schedule is empty.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| EntryRow::new(index, entry))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format search or date-view results as numbered lines
pub fn format_matches(matches: &[(usize, &Entry)]) -> String {
    let mut output = String::new();
    for (index, entry) in matches {
        output.push_str(&format!("{}. {}\n", index + 1, entry));
    }
    output
}

/// Format upcoming entries for the reminder view
pub fn format_reminders(entries: &[&Entry], days: i64) -> String {
    if entries.is_empty() {
        return format!("Nothing scheduled within the next {} days.\n", days);
    }

    let mut output = format!("Coming up within {} days:\n", days);
    for entry in entries {
        output.push_str(&format!("  {}\n", entry));
    }
    output
}

/// Format the free-day report
pub fn format_free_days(days: &[NaiveDate]) -> String {
    let mut output = format!("Your next {} free days:\n", days.len());
    for day in days {
        output.push_str(&format!("  {}\n", day.format("%a %d %b %Y")));
    }
    output
}

//! Weekly calendar view
//!
//! Renders seven days of the schedule as a textual grid, starting from a
//! caller-supplied day. The command layer keeps the start date and moves it
//! a week at a time for `calendar next` / `calendar last`.

use chrono::Duration;

use crate::models::EntryDate;
use crate::services::Schedule;

/// Number of days shown per calendar page
pub const CALENDAR_DAYS: i64 = 7;

/// Render one week of the schedule starting at `start` (midnight-aligned)
pub fn render_week(schedule: &Schedule, start: EntryDate) -> String {
    let first = start.date();
    let last = first + Duration::days(CALENDAR_DAYS - 1);

    let mut output = format!(
        "Schedule from {} to {}\n",
        first.format("%d %b %Y"),
        last.format("%d %b %Y")
    );
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for offset in 0..CALENDAR_DAYS {
        let day = first + Duration::days(offset);
        output.push_str(&format!("{}\n", day.format("%a %d %b %Y")));

        let todays = schedule.entries_on(day);
        if todays.is_empty() {
            output.push_str("  (free)\n");
        } else {
            for (index, entry) in todays {
                output.push_str(&format!("  {}. {}\n", index + 1, entry));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryKind};

    fn date(text: &str) -> EntryDate {
        EntryDate::parse(text).unwrap()
    }

    #[test]
    fn test_week_shows_entries_and_free_days() {
        let schedule = Schedule::from_entries(
            vec![
                Entry::todo("homework", date("02-12-2019")),
                Entry::timed(
                    EntryKind::Practice,
                    "sectionals",
                    date("03-12-2019 1500"),
                    date("03-12-2019 1800"),
                )
                .unwrap(),
            ],
            50,
        );

        let output = render_week(&schedule, date("02-12-2019"));
        assert!(output.contains("Schedule from 02 Dec 2019 to 08 Dec 2019"));
        assert!(output.contains("homework"));
        assert!(output.contains("sectionals"));
        assert!(output.contains("(free)"));
        // Seven day headers beneath the title line.
        let day_headers = output
            .lines()
            .filter(|line| line.ends_with("Dec 2019") && !line.starts_with("Schedule"))
            .count();
        assert_eq!(day_headers, 7);
    }

    #[test]
    fn test_entries_outside_week_are_hidden() {
        let schedule = Schedule::from_entries(
            vec![Entry::todo("far away", date("20-01-2020"))],
            50,
        );
        let output = render_week(&schedule, date("02-12-2019"));
        assert!(!output.contains("far away"));
    }
}

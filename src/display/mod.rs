//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries, reminders, and the weekly
//! calendar view.

pub mod calendar;
pub mod entry;

pub use calendar::{render_week, CALENDAR_DAYS};
pub use entry::{format_entry_list, format_free_days, format_matches, format_reminders};

//! Read-only commands: list, find, view, check, reminder, calendar

use super::Session;
use crate::audit::{AuditEntry, Operation};
use crate::display;
use crate::error::{MaestroError, MaestroResult};
use crate::models::EntryDate;

/// `list`
pub(crate) fn handle_list(session: &Session) -> MaestroResult<()> {
    print!("{}", display::format_entry_list(session.schedule.entries()));
    Ok(())
}

/// `find <keyword>`
pub(crate) fn handle_find(session: &Session, args: &str) -> MaestroResult<()> {
    if args.is_empty() {
        println!("Usage: find <keyword>");
        return Ok(());
    }

    let matches = session.schedule.find(args);
    if matches.is_empty() {
        println!("No entries match '{}'.", args);
    } else {
        print!("{}", display::format_matches(&matches));
    }
    Ok(())
}

/// `view <dd-MM-yyyy>`
pub(crate) fn handle_view(session: &Session, args: &str) -> MaestroResult<()> {
    if args.is_empty() {
        println!("Usage: view <dd-MM-yyyy>");
        return Ok(());
    }

    let date = EntryDate::parse(args)?;
    let matches = session.schedule.entries_on(date.date());
    if matches.is_empty() {
        println!("Nothing scheduled on {}.", date.display_string());
    } else {
        print!("{}", display::format_matches(&matches));
    }
    Ok(())
}

/// `check` — the next three free days
pub(crate) fn handle_check(session: &Session) -> MaestroResult<()> {
    let free = session.schedule.free_days(session.today, 3);
    print!("{}", display::format_free_days(&free));
    Ok(())
}

/// `reminder [days]`
pub(crate) fn handle_reminder(session: &Session, args: &str) -> MaestroResult<()> {
    let days: i64 = if args.is_empty() {
        3
    } else {
        args.parse()
            .map_err(|_| MaestroError::NumberFormat(args.to_string()))?
    };

    let upcoming = session.schedule.reminders_within(session.today, days);
    print!("{}", display::format_reminders(&upcoming, days));
    Ok(())
}

/// `calendar [next|last|on|off]`
pub(crate) fn handle_calendar(session: &mut Session, args: &str) -> MaestroResult<()> {
    match args {
        "" => {
            print!(
                "{}",
                display::render_week(&session.schedule, session.calendar_start)
            );
        }
        "next" => {
            session.calendar_start = session
                .calendar_start
                .add_days_at_midnight(display::CALENDAR_DAYS);
            print!(
                "{}",
                display::render_week(&session.schedule, session.calendar_start)
            );
        }
        "last" => {
            session.calendar_start = session
                .calendar_start
                .add_days_at_midnight(-display::CALENDAR_DAYS);
            print!(
                "{}",
                display::render_week(&session.schedule, session.calendar_start)
            );
        }
        "on" => {
            session.settings.calendar_auto_print = true;
            session.save_settings();
            let _ = session.audit.log(&AuditEntry::new(
                Operation::Configure,
                "calendar auto-print on",
            ));
            println!("The calendar will be printed after every command.");
        }
        "off" => {
            session.settings.calendar_auto_print = false;
            session.save_settings();
            let _ = session.audit.log(&AuditEntry::new(
                Operation::Configure,
                "calendar auto-print off",
            ));
            println!("The calendar will no longer be printed automatically.");
        }
        _ => println!("Usage: calendar [next|last|on|off]"),
    }
    Ok(())
}

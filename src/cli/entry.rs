//! Entry mutation commands: add, done, delete, edit, reschedule

use super::{parse_index, Session};
use crate::audit::{AuditEntry, Operation};
use crate::error::{MaestroError, MaestroResult};
use crate::models::{Entry, EntryDate, EntryKind};
use crate::services;

/// `todo <desc>/<date>`
pub(crate) fn handle_todo(session: &mut Session, args: &str) -> MaestroResult<()> {
    let Some((description, date_text)) = args.split_once('/') else {
        println!("Usage: todo <description>/<dd-MM-yyyy>");
        return Ok(());
    };

    let date = EntryDate::parse(date_text)?;
    let entry = Entry::todo(description.trim(), date);
    let summary = entry.to_string();

    session.schedule.add(entry)?;
    println!(
        "Added: {} ({} entries in the schedule)",
        summary,
        session.schedule.len()
    );
    warn_if_past(session, date);
    session.commit(AuditEntry::new(Operation::Add, format!("added {}", summary)));
    Ok(())
}

/// `lesson|concert|practice|exam|recital <desc>/<start>/<end>[/<cost>][/p<days>]`
pub(crate) fn handle_add_timed(
    session: &mut Session,
    kind_word: &str,
    args: &str,
) -> MaestroResult<()> {
    let kind = match kind_word {
        "lesson" => EntryKind::Lesson,
        "concert" => EntryKind::Concert,
        "practice" => EntryKind::Practice,
        "exam" => EntryKind::Exam,
        "recital" => EntryKind::Recital,
        _ => unreachable!("dispatch only routes timed kinds here"),
    };

    let mut parts: Vec<&str> = args.split('/').map(str::trim).collect();
    let required = if kind == EntryKind::Concert { 4 } else { 3 };

    // An optional trailing p<days> part marks a repeating series.
    let mut period = None;
    if parts.len() == required + 1 {
        let last = parts[parts.len() - 1];
        if let Some(digits) = last.strip_prefix('p') {
            let days: i64 = digits
                .parse()
                .map_err(|_| MaestroError::NumberFormat(digits.to_string()))?;
            parts.truncate(parts.len() - 1);
            period = Some(days);
        }
    }

    if parts.len() != required {
        match kind {
            EntryKind::Concert => {
                println!("Usage: concert <description>/<start>/<end>/<cost>[/p<days>]")
            }
            _ => println!(
                "Usage: {} <description>/<start>/<end>[/p<days>]",
                kind_word
            ),
        }
        return Ok(());
    }

    let description = parts[0];
    let start = EntryDate::parse(parts[1])?;
    let end = EntryDate::parse(parts[2])?;

    let entry = if kind == EntryKind::Concert {
        let cost: i64 = parts[3]
            .parse()
            .map_err(|_| MaestroError::NumberFormat(parts[3].to_string()))?;
        Entry::concert(description, start, end, cost)?
    } else {
        Entry::timed(kind, description, start, end)?
    };
    let summary = entry.to_string();

    let audit_detail = match period {
        Some(days) => {
            session.schedule.add_recurring(entry, days)?;
            println!(
                "Added recurring (every {} days): {} ({} entries in the schedule)",
                days,
                summary,
                session.schedule.len()
            );
            format!("added {} repeating every {} days", summary, days)
        }
        None => {
            session.schedule.add(entry)?;
            println!(
                "Added: {} ({} entries in the schedule)",
                summary,
                session.schedule.len()
            );
            format!("added {}", summary)
        }
    };

    warn_if_past(session, start);
    session.commit(AuditEntry::new(Operation::Add, audit_detail));
    Ok(())
}

/// `done <n>`
pub(crate) fn handle_done(session: &mut Session, args: &str) -> MaestroResult<()> {
    let index = parse_index(args)?;
    let entry = session.schedule.entry(index)?;

    if entry.kind != EntryKind::Todo {
        println!("Only to-do entries can be marked as done.");
        return Ok(());
    }

    let entry = session.schedule.entry_mut(index)?;
    entry.mark_done();
    let summary = entry.to_string();
    println!("Marked as done: {}", summary);
    session.commit(AuditEntry::new(
        Operation::Update,
        format!("completed {}", summary),
    ));
    Ok(())
}

/// `delete <n>`
pub(crate) fn handle_delete(session: &mut Session, args: &str) -> MaestroResult<()> {
    let index = parse_index(args)?;
    let deleted = session.schedule.delete(index)?;
    println!("Deleted: {}", deleted);
    session.commit(AuditEntry::new(
        Operation::Delete,
        format!("deleted {}", deleted),
    ));
    Ok(())
}

/// `edit <n>/<new description>`
pub(crate) fn handle_edit(session: &mut Session, args: &str) -> MaestroResult<()> {
    let Some((index_text, description)) = args.split_once('/') else {
        println!("Usage: edit <n>/<new description>");
        return Ok(());
    };

    let index = parse_index(index_text)?;
    session.schedule.edit(index, description.trim())?;
    let summary = session.schedule.entry(index)?.to_string();
    println!("Updated: {}", summary);
    session.commit(AuditEntry::new(
        Operation::Update,
        format!("edited {}", summary),
    ));
    Ok(())
}

/// `reschedule <n> <dd-MM-yyyy> <HHmm> <HHmm>`
pub(crate) fn handle_reschedule(session: &mut Session, args: &str) -> MaestroResult<()> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [index_text, date_text, start_time, end_time] = parts.as_slice() else {
        println!("Usage: reschedule <n> <dd-MM-yyyy> <HHmm (start)> <HHmm (end)>");
        return Ok(());
    };

    let index = parse_index(index_text)?;
    let new_start = EntryDate::parse(&format!("{} {}", date_text, start_time))?;
    let new_end = EntryDate::parse(&format!("{} {}", date_text, end_time))?;

    services::reschedule(&mut session.schedule, index, new_start, new_end)?;

    // The schedule is unsorted until commit, so the moved entry is the tail.
    let summary = session
        .schedule
        .entries()
        .last()
        .map(|entry| entry.to_string())
        .unwrap_or_default();
    println!("Rescheduled: {}", summary);
    session.commit(AuditEntry::new(
        Operation::Update,
        format!("rescheduled {}", summary),
    ));
    Ok(())
}

/// Point out entries that start before today
fn warn_if_past(session: &Session, start: EntryDate) {
    if start.date() < session.today {
        println!("Note: that entry is already in the past.");
    }
}

//! Annotation commands: goals, contacts, and checklists on an entry

use super::{parse_index, Session};
use crate::audit::{AuditEntry, Operation};
use crate::error::MaestroResult;
use crate::models::{Contact, Goal};

/// `goal add <n>/<text>`, `goal delete|achieved <n> <g>`,
/// `goal edit <n> <g>/<text>`, `goal view <n>`
pub(crate) fn handle_goal(session: &mut Session, args: &str) -> MaestroResult<()> {
    let (head, tail) = split_head(args);
    let words: Vec<&str> = head.split_whitespace().collect();

    match words.as_slice() {
        ["add", entry_text] => {
            let Some(text) = tail else {
                println!("Usage: goal add <n>/<text>");
                return Ok(());
            };
            let index = parse_index(entry_text)?;
            let entry = session.schedule.entry_mut(index)?;
            entry.add_goal(Goal::new(text));
            let description = entry.description.clone();
            println!("Goal added to '{}'.", description);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("added a goal to '{}'", description),
            ));
        }
        ["delete", entry_text, goal_text] => {
            let index = parse_index(entry_text)?;
            let goal_index = parse_index(goal_text)?;
            let entry = session.schedule.entry_mut(index)?;
            let removed = entry.remove_goal(goal_index)?;
            println!("Goal deleted: {}", removed.text);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("deleted goal '{}'", removed.text),
            ));
        }
        ["edit", entry_text, goal_text] => {
            let Some(text) = tail else {
                println!("Usage: goal edit <n> <g>/<text>");
                return Ok(());
            };
            let index = parse_index(entry_text)?;
            let goal_index = parse_index(goal_text)?;
            let entry = session.schedule.entry_mut(index)?;
            entry.edit_goal(goal_index, Goal::new(text))?;
            println!("Goal updated: {}", text);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("edited a goal to '{}'", text),
            ));
        }
        ["achieved", entry_text, goal_text] => {
            let index = parse_index(entry_text)?;
            let goal_index = parse_index(goal_text)?;
            let entry = session.schedule.entry_mut(index)?;
            if entry.goals.get(goal_index).map(|g| g.achieved) == Some(true) {
                println!("That goal is already achieved.");
                return Ok(());
            }
            let goal = entry.achieve_goal(goal_index)?;
            let text = goal.text.clone();
            println!("Goal achieved: {}", text);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("achieved goal '{}'", text),
            ));
        }
        ["view", entry_text] => {
            let index = parse_index(entry_text)?;
            let entry = session.schedule.entry(index)?;
            if entry.goals.is_empty() {
                println!("'{}' has no goals yet.", entry.description);
            } else {
                println!("Goals for '{}':", entry.description);
                for (position, goal) in entry.goals.iter().enumerate() {
                    println!("  {}. {}", position + 1, goal);
                }
            }
        }
        _ => println!("Usage: goal add|delete|edit|achieved|view ... (see 'help goal')"),
    }
    Ok(())
}

/// `contact add <n>/<name>,<email>,<phone>`, `contact delete <n> <c>`,
/// `contact edit <n> <c>/<field>,<value>`, `contact view <n>`
pub(crate) fn handle_contact(session: &mut Session, args: &str) -> MaestroResult<()> {
    let (head, tail) = split_head(args);
    let words: Vec<&str> = head.split_whitespace().collect();

    match words.as_slice() {
        ["add", entry_text] => {
            let fields: Vec<&str> = tail
                .map(|text| text.split(',').map(str::trim).collect())
                .unwrap_or_default();
            let [name, email, phone] = fields.as_slice() else {
                println!("Usage: contact add <n>/<name>,<email>,<phone>");
                return Ok(());
            };
            let index = parse_index(entry_text)?;
            let entry = session.schedule.entry_mut(index)?;
            entry.add_contact(Contact::new(*name, *email, *phone));
            let description = entry.description.clone();
            println!("Contact added to '{}'.", description);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("added a contact to '{}'", description),
            ));
        }
        ["delete", entry_text, contact_text] => {
            let index = parse_index(entry_text)?;
            let contact_index = parse_index(contact_text)?;
            let entry = session.schedule.entry_mut(index)?;
            let removed = entry.remove_contact(contact_index)?;
            println!("Contact deleted: {}", removed.name);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("deleted contact '{}'", removed.name),
            ));
        }
        ["edit", entry_text, contact_text] => {
            let parts: Vec<&str> = tail
                .map(|text| text.splitn(2, ',').map(str::trim).collect())
                .unwrap_or_default();
            let [field, value] = parts.as_slice() else {
                println!("Usage: contact edit <n> <c>/<field>,<value>");
                return Ok(());
            };
            let index = parse_index(entry_text)?;
            let contact_index = parse_index(contact_text)?;
            let entry = session.schedule.entry_mut(index)?;
            let mut contact = entry.contact(contact_index)?.clone();
            match *field {
                "name" => contact.name = value.to_string(),
                "email" => contact.email = value.to_string(),
                "phone" => contact.phone = value.to_string(),
                other => {
                    println!("Unknown contact field '{}': use name, email, or phone.", other);
                    return Ok(());
                }
            }
            entry.edit_contact(contact_index, contact)?;
            println!("Contact updated.");
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("edited contact {} {}", field, value),
            ));
        }
        ["view", entry_text] => {
            let index = parse_index(entry_text)?;
            let entry = session.schedule.entry(index)?;
            if entry.contacts.is_empty() {
                println!("'{}' has no contacts yet.", entry.description);
            } else {
                println!("Contacts for '{}':", entry.description);
                for (position, contact) in entry.contacts.iter().enumerate() {
                    println!("  {}. {}", position + 1, contact);
                }
            }
        }
        _ => println!("Usage: contact add|delete|edit|view ... (see 'help contact')"),
    }
    Ok(())
}

/// `checklist add <n>/<text>`, `checklist delete <n> <c>`,
/// `checklist edit <n> <c>/<text>`, `checklist view <n>`
pub(crate) fn handle_checklist(session: &mut Session, args: &str) -> MaestroResult<()> {
    let (head, tail) = split_head(args);
    let words: Vec<&str> = head.split_whitespace().collect();

    match words.as_slice() {
        ["add", entry_text] => {
            let Some(text) = tail else {
                println!("Usage: checklist add <n>/<text>");
                return Ok(());
            };
            let index = parse_index(entry_text)?;
            let entry = session.schedule.entry_mut(index)?;
            entry.add_checklist_item(text);
            let description = entry.description.clone();
            println!("Checklist item added to '{}'.", description);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("added a checklist item to '{}'", description),
            ));
        }
        ["delete", entry_text, item_text] => {
            let index = parse_index(entry_text)?;
            let item_index = parse_index(item_text)?;
            let entry = session.schedule.entry_mut(index)?;
            let removed = entry.remove_checklist_item(item_index)?;
            println!("Checklist item deleted: {}", removed);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("deleted checklist item '{}'", removed),
            ));
        }
        ["edit", entry_text, item_text] => {
            let Some(text) = tail else {
                println!("Usage: checklist edit <n> <c>/<text>");
                return Ok(());
            };
            let index = parse_index(entry_text)?;
            let item_index = parse_index(item_text)?;
            let entry = session.schedule.entry_mut(index)?;
            entry.edit_checklist_item(item_index, text)?;
            println!("Checklist item updated: {}", text);
            session.commit(AuditEntry::new(
                Operation::Update,
                format!("edited a checklist item to '{}'", text),
            ));
        }
        ["view", entry_text] => {
            let index = parse_index(entry_text)?;
            let entry = session.schedule.entry(index)?;
            if entry.checklist.is_empty() {
                println!("'{}' has no checklist yet.", entry.description);
            } else {
                println!("Checklist for '{}':", entry.description);
                for (position, item) in entry.checklist.iter().enumerate() {
                    println!("  {}. {}", position + 1, item);
                }
            }
        }
        _ => println!("Usage: checklist add|delete|edit|view ... (see 'help checklist')"),
    }
    Ok(())
}

/// Split `"<subcommand and indices>/<free text>"` into its two halves
fn split_head(args: &str) -> (&str, Option<&str>) {
    match args.split_once('/') {
        Some((head, tail)) => (head.trim(), Some(tail.trim())),
        None => (args.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_head() {
        assert_eq!(split_head("add 2/practice slurs"), ("add 2", Some("practice slurs")));
        assert_eq!(split_head("view 2"), ("view 2", None));
        assert_eq!(split_head("delete 1 3"), ("delete 1 3", None));
    }
}

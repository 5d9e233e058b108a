//! Budget commands: show monthly concert spending, set the cap

use super::Session;
use crate::audit::{AuditEntry, Operation};
use crate::error::{MaestroError, MaestroResult};

/// `budget set <n>` or `budget <MM-yyyy>`
pub(crate) fn handle_budget(session: &mut Session, args: &str) -> MaestroResult<()> {
    if args.is_empty() {
        println!("Usage: budget set <n>  or  budget <MM-yyyy>");
        return Ok(());
    }

    if let Some(amount_text) = args.strip_prefix("set ") {
        let cap: i64 = amount_text
            .trim()
            .parse()
            .map_err(|_| MaestroError::NumberFormat(amount_text.trim().to_string()))?;

        session.schedule.budget_mut().set_cap(cap);
        session.settings.monthly_budget = cap;
        session.save_settings();
        let _ = session.audit.log(&AuditEntry::new(
            Operation::Configure,
            format!("monthly budget set to {}", cap),
        ));
        println!("Monthly concert budget set to {}.", cap);
        return Ok(());
    }

    // Anything else is treated as a month key.
    match session.schedule.budget().cost_for_month(args) {
        Some(cost) => println!("Total concert cost for {}: {}", args, cost),
        None => println!("No concerts found for {}.", args),
    }
    Ok(())
}

//! Monthly concert budget ledger
//!
//! Tracks the accumulated cost of concert entries per calendar month and
//! enforces a user-adjustable monthly cap. The ledger is built once from the
//! loaded schedule at startup and maintained incrementally on every add and
//! remove afterwards; it is never rebuilt wholesale.

use std::collections::HashMap;

use crate::error::{MaestroError, MaestroResult};
use crate::models::Entry;

/// Monthly spending cap applied when the user has not configured one
pub const DEFAULT_MONTHLY_CAP: i64 = 50;

/// Ledger of accumulated concert costs keyed by `MM-yyyy` month
#[derive(Debug, Clone)]
pub struct BudgetLedger {
    /// Current user-defined monthly cap
    cap: i64,

    /// Accumulated concert cost per month; a missing key means no concerts
    /// are recorded for that month, which is distinct from a zero total
    monthly: HashMap<String, i64>,
}

impl BudgetLedger {
    /// Create an empty ledger with the given cap
    pub fn new(cap: i64) -> Self {
        Self {
            cap,
            monthly: HashMap::new(),
        }
    }

    /// Build a ledger by scanning an existing entry collection
    ///
    /// Used once at startup. Costs already persisted are accepted as-is; the
    /// cap is only enforced against subsequent additions.
    pub fn from_entries<'a, I>(entries: I, cap: i64) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut ledger = Self::new(cap);
        for entry in entries {
            ledger.restore(entry);
        }
        ledger
    }

    /// Get the current monthly cap
    pub fn cap(&self) -> i64 {
        self.cap
    }

    /// Set a new monthly cap
    ///
    /// Months that already exceed the new cap are left alone; the cap only
    /// affects future additions.
    pub fn set_cap(&mut self, cap: i64) {
        self.cap = cap;
    }

    /// Accumulated concert cost for a `MM-yyyy` month key
    ///
    /// `None` means no concerts are recorded for that month.
    pub fn cost_for_month(&self, key: &str) -> Option<i64> {
        self.monthly.get(key).copied()
    }

    /// Try to record a cost-bearing entry against its month
    ///
    /// No-op for entries without a cost. Fails with
    /// [`MaestroError::BudgetExceeded`] and leaves the ledger unchanged when
    /// the month's total would exceed the cap.
    pub fn try_add(&mut self, entry: &Entry) -> MaestroResult<()> {
        let Some(cost) = entry.cost else {
            return Ok(());
        };
        let key = entry.start.month_key();
        let current = self.monthly.get(&key).copied().unwrap_or(0);
        if current + cost > self.cap {
            return Err(MaestroError::BudgetExceeded {
                entry: Box::new(entry.clone()),
                cap: self.cap,
            });
        }
        self.monthly.insert(key, current + cost);
        Ok(())
    }

    /// Remove a cost-bearing entry's contribution from its month
    ///
    /// Used when an entry is deleted or a staged addition is undone. Months
    /// whose total drops to zero are forgotten entirely so they report as
    /// "no concerts recorded".
    pub fn remove(&mut self, entry: &Entry) {
        let Some(cost) = entry.cost else {
            return;
        };
        let key = entry.start.month_key();
        if let Some(total) = self.monthly.get_mut(&key) {
            *total -= cost;
            if *total <= 0 {
                self.monthly.remove(&key);
            }
        }
    }

    /// Record a cost-bearing entry without enforcing the cap
    ///
    /// Startup scans and undo-delete restores must never fail, so they
    /// bypass the cap check.
    pub fn restore(&mut self, entry: &Entry) {
        let Some(cost) = entry.cost else {
            return;
        };
        let key = entry.start.month_key();
        *self.monthly.entry(key).or_insert(0) += cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDate, EntryKind};

    fn concert(description: &str, start: &str, end: &str, cost: i64) -> Entry {
        Entry::concert(
            description,
            EntryDate::parse(start).unwrap(),
            EntryDate::parse(end).unwrap(),
            cost,
        )
        .unwrap()
    }

    fn practice(description: &str, start: &str, end: &str) -> Entry {
        Entry::timed(
            EntryKind::Practice,
            description,
            EntryDate::parse(start).unwrap(),
            EntryDate::parse(end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_accumulates_within_cap() {
        let mut ledger = BudgetLedger::new(75);
        for name in ["test1", "test2", "test3"] {
            let entry = concert(name, "02-12-2019 1500", "02-12-2019 1600", 5);
            ledger.try_add(&entry).unwrap();
        }
        assert_eq!(ledger.cost_for_month("12-2019"), Some(15));
    }

    #[test]
    fn test_rejects_over_cap_and_leaves_total_unchanged() {
        let mut ledger = BudgetLedger::new(75);
        for name in ["test1", "test2", "test3"] {
            let entry = concert(name, "02-12-2019 1500", "02-12-2019 1600", 5);
            ledger.try_add(&entry).unwrap();
        }

        let over = concert("test4", "02-12-2019 1500", "02-12-2019 1600", 61);
        let err = ledger.try_add(&over).unwrap_err();
        assert!(matches!(err, MaestroError::BudgetExceeded { cap: 75, .. }));
        assert_eq!(ledger.cost_for_month("12-2019"), Some(15));
    }

    #[test]
    fn test_exactly_at_cap_is_allowed() {
        let mut ledger = BudgetLedger::new(50);
        let entry = concert("big", "02-12-2019 1500", "02-12-2019 1600", 50);
        assert!(ledger.try_add(&entry).is_ok());
        assert_eq!(ledger.cost_for_month("12-2019"), Some(50));
    }

    #[test]
    fn test_cost_free_entries_are_ignored() {
        let mut ledger = BudgetLedger::new(50);
        let entry = practice("horn practice", "05-12-2019 1400", "05-12-2019 1600");
        ledger.try_add(&entry).unwrap();
        ledger.remove(&entry);
        assert_eq!(ledger.cost_for_month("12-2019"), None);
    }

    #[test]
    fn test_months_are_independent() {
        let mut ledger = BudgetLedger::new(50);
        ledger
            .try_add(&concert("dec", "02-12-2019 1500", "02-12-2019 1600", 45))
            .unwrap();
        ledger
            .try_add(&concert("jan", "02-01-2020 1500", "02-01-2020 1600", 45))
            .unwrap();
        assert_eq!(ledger.cost_for_month("12-2019"), Some(45));
        assert_eq!(ledger.cost_for_month("01-2020"), Some(45));
    }

    #[test]
    fn test_remove_reverts_contribution() {
        let mut ledger = BudgetLedger::new(50);
        let a = concert("a", "02-12-2019 1500", "02-12-2019 1600", 20);
        let b = concert("b", "09-12-2019 1500", "09-12-2019 1600", 10);
        ledger.try_add(&a).unwrap();
        ledger.try_add(&b).unwrap();

        ledger.remove(&b);
        assert_eq!(ledger.cost_for_month("12-2019"), Some(20));

        // A month with no remaining concerts is forgotten, not zero.
        ledger.remove(&a);
        assert_eq!(ledger.cost_for_month("12-2019"), None);
    }

    #[test]
    fn test_set_cap_is_prospective_only() {
        let mut ledger = BudgetLedger::new(5);
        let small = concert("small", "02-12-2019 1500", "02-12-2019 1600", 6);
        assert!(ledger.try_add(&small).is_err());

        ledger.set_cap(75);
        assert_eq!(ledger.cap(), 75);
        assert!(ledger.try_add(&small).is_ok());
    }

    #[test]
    fn test_from_entries_ignores_cap() {
        // Pre-existing file contents are accepted even over the cap.
        let entries = vec![
            concert("a", "02-12-2019 1500", "02-12-2019 1600", 40),
            concert("b", "09-12-2019 1700", "09-12-2019 1800", 40),
            practice("rehearsal", "10-12-2019 1400", "10-12-2019 1600"),
        ];
        let ledger = BudgetLedger::from_entries(&entries, 50);
        assert_eq!(ledger.cost_for_month("12-2019"), Some(80));
    }
}

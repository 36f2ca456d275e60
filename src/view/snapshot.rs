//! Render snapshots
//!
//! A snapshot is an immutable picture of the ledger taken after every
//! mutation or filter change. Renderers consume snapshots instead of
//! reaching into the store, so data flows one way.

use crate::models::Entry;

use super::filter::EntryFilter;
use super::summary::Totals;

/// Everything a renderer needs: the visible rows and the ledger totals
///
/// Totals always cover the whole ledger; the filter only selects which
/// rows are visible.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The filter that produced this snapshot
    pub filter: EntryFilter,
    /// Visible entries, newest first
    pub entries: Vec<Entry>,
    /// Totals over the entire ledger, regardless of filter
    pub totals: Totals,
}

impl Snapshot {
    /// Capture a snapshot of the given ledger contents
    pub fn capture(all: &[Entry], filter: EntryFilter) -> Self {
        Self {
            filter,
            entries: all.iter().filter(|e| filter.matches(e)).cloned().collect(),
            totals: Totals::compute(all),
        }
    }

    /// Check if the visible list has no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Message shown in place of an empty list
    pub fn empty_message(&self) -> String {
        match self.filter {
            EntryFilter::All => "No entries found.".to_string(),
            other => format!("No {} entries found.", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryFields, EntryKind, Money};
    use chrono::NaiveDate;

    fn entry(kind: EntryKind, description: &str, cents: i64) -> Entry {
        Entry::new(EntryFields {
            kind,
            description: description.to_string(),
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        })
    }

    #[test]
    fn test_filter_selects_rows_but_totals_cover_everything() {
        let all = vec![
            entry(EntryKind::Expense, "Rent", 80000),
            entry(EntryKind::Income, "Salary", 250000),
        ];

        let snapshot = Snapshot::capture(&all, EntryFilter::Income);

        assert_eq!(snapshot.entries.len(), 1);
        assert_eq!(snapshot.entries[0].description, "Salary");
        // Totals still see the expense
        assert_eq!(snapshot.totals.expense, Money::from_cents(80000));
        assert_eq!(snapshot.totals.balance, Money::from_cents(170000));
    }

    #[test]
    fn test_preserves_order() {
        let all = vec![
            entry(EntryKind::Income, "Newest", 300),
            entry(EntryKind::Income, "Middle", 200),
            entry(EntryKind::Income, "Oldest", 100),
        ];

        let snapshot = Snapshot::capture(&all, EntryFilter::All);
        let names: Vec<_> = snapshot.entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, ["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_empty_messages() {
        let snapshot = Snapshot::capture(&[], EntryFilter::All);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.empty_message(), "No entries found.");

        let snapshot = Snapshot::capture(&[], EntryFilter::Income);
        assert_eq!(snapshot.empty_message(), "No income entries found.");

        let snapshot = Snapshot::capture(&[], EntryFilter::Expense);
        assert_eq!(snapshot.empty_message(), "No expense entries found.");
    }

    #[test]
    fn test_filtered_to_empty_still_reports_totals() {
        let all = vec![entry(EntryKind::Expense, "Rent", 80000)];
        let snapshot = Snapshot::capture(&all, EntryFilter::Income);

        assert!(snapshot.is_empty());
        assert_eq!(snapshot.totals.expense, Money::from_cents(80000));
    }
}

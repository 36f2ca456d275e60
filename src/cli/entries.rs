//! Entry CLI commands
//!
//! Implements the add/list/edit/delete/summary commands, bridging clap
//! argument parsing with the form controller and the ledger.

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::{format_entry_line, format_entry_table, format_totals};
use crate::error::{CashflowError, CashflowResult};
use crate::models::{EntryId, EntryKind};
use crate::services::{EntryInput, FormController};
use crate::storage::{EntryStore, KeyValueStore};
use crate::view::{EntryFilter, Snapshot, Totals};

/// Entry kind argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for EntryKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => EntryKind::Income,
            KindArg::Expense => EntryKind::Expense,
        }
    }
}

/// List filter argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Income,
    Expense,
}

impl From<FilterArg> for EntryFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => EntryFilter::All,
            FilterArg::Income => EntryFilter::Income,
            FilterArg::Expense => EntryFilter::Expense,
        }
    }
}

/// Today's date in the form's YYYY-MM-DD shape
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Handle `cashflow add`
pub fn handle_add<S: KeyValueStore>(
    store: &mut EntryStore<S>,
    settings: &Settings,
    kind: KindArg,
    description: String,
    amount: String,
    date: Option<String>,
) -> CashflowResult<()> {
    let input = EntryInput {
        kind: kind.into(),
        description,
        amount,
        date: date.unwrap_or_else(today),
    };

    let mut form = FormController::new();
    let entry = form.add(store, &input)?;

    println!("Entry added!");
    println!("{}", format_entry_line(&entry, settings));
    Ok(())
}

/// Handle `cashflow list`
pub fn handle_list<S: KeyValueStore>(
    store: &EntryStore<S>,
    settings: &Settings,
    filter: FilterArg,
) -> CashflowResult<()> {
    let snapshot = Snapshot::capture(store.all(), filter.into());
    print!("{}", format_entry_table(&snapshot, settings));
    Ok(())
}

/// Handle `cashflow edit`
///
/// Flags act as overrides: omitted fields keep the entry's current values.
pub fn handle_edit<S: KeyValueStore>(
    store: &mut EntryStore<S>,
    settings: &Settings,
    id: String,
    kind: Option<KindArg>,
    description: Option<String>,
    amount: Option<String>,
    date: Option<String>,
) -> CashflowResult<()> {
    let id = EntryId::from(id);

    let mut form = FormController::new();
    let current = form
        .start_edit(store, &id)
        .ok_or_else(|| CashflowError::entry_not_found(id.to_string()))?;

    let mut input = EntryInput::from_entry(&current);
    if let Some(kind) = kind {
        input.kind = kind.into();
    }
    if let Some(description) = description {
        input.description = description;
    }
    if let Some(amount) = amount {
        input.amount = amount;
    }
    if let Some(date) = date {
        input.date = date;
    }

    match form.update(store, &input)? {
        Some(entry) => {
            println!("Entry updated!");
            println!("{}", format_entry_line(&entry, settings));
            Ok(())
        }
        None => Err(CashflowError::entry_not_found(id.to_string())),
    }
}

/// Handle `cashflow delete`
pub fn handle_delete<S: KeyValueStore>(
    store: &mut EntryStore<S>,
    id: String,
) -> CashflowResult<()> {
    let id = EntryId::from(id);

    if store.remove(&id)? {
        println!("Entry deleted");
        Ok(())
    } else {
        Err(CashflowError::entry_not_found(id.to_string()))
    }
}

/// Handle `cashflow summary`
pub fn handle_summary<S: KeyValueStore>(
    store: &EntryStore<S>,
    settings: &Settings,
) -> CashflowResult<()> {
    let totals = Totals::compute(store.all());
    print!("{}", format_totals(&totals, settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_add_then_edit_overrides_only_given_fields() {
        let mut store = EntryStore::open(MemoryStore::new());
        let settings = Settings::default();

        handle_add(
            &mut store,
            &settings,
            KindArg::Expense,
            "Groceries".to_string(),
            "450.50".to_string(),
            Some("2024-01-15".to_string()),
        )
        .unwrap();

        let id = store.all()[0].id.to_string();
        handle_edit(
            &mut store,
            &settings,
            id,
            None,
            None,
            Some("500".to_string()),
            None,
        )
        .unwrap();

        let entry = &store.all()[0];
        assert_eq!(entry.description, "Groceries");
        assert_eq!(entry.amount.cents(), 50000);
        assert_eq!(entry.kind, EntryKind::Expense);
    }

    #[test]
    fn test_edit_unknown_id_errors() {
        let mut store = EntryStore::open(MemoryStore::new());
        let settings = Settings::default();

        let err = handle_edit(
            &mut store,
            &settings,
            "missing".to_string(),
            None,
            None,
            None,
            None,
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_unknown_id_errors() {
        let mut store = EntryStore::open(MemoryStore::new());
        let err = handle_delete(&mut store, "missing".to_string()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let mut store = EntryStore::open(MemoryStore::new());
        let settings = Settings::default();

        handle_add(
            &mut store,
            &settings,
            KindArg::Income,
            "Salary".to_string(),
            "2500".to_string(),
            None,
        )
        .unwrap();

        let expected = chrono::Local::now().date_naive();
        assert_eq!(store.all()[0].date, expected);
    }
}

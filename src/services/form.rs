//! Entry form: validation and the add/edit session
//!
//! The form controller drives the shared add/edit form. A session is either
//! creating a new entry or editing an existing one. Validation runs before
//! the session is consulted; a validation failure leaves the session alone
//! so the user can correct their input, while every other outcome returns
//! the session to Create.

use std::mem;

use chrono::NaiveDate;
use log::warn;
use thiserror::Error;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{Entry, EntryFields, EntryId, EntryKind, Money};
use crate::storage::{EntryStore, KeyValueStore};

/// User-facing validation failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a description")]
    MissingDescription,
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("Please select a date")]
    MissingDate,
}

impl From<ValidationError> for CashflowError {
    fn from(err: ValidationError) -> Self {
        CashflowError::Validation(err.to_string())
    }
}

/// Raw form input, exactly as the user typed it
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub kind: EntryKind,
    pub description: String,
    pub amount: String,
    pub date: String,
}

impl EntryInput {
    /// Prefill the form from an existing entry
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            kind: entry.kind,
            description: entry.description.clone(),
            amount: entry.amount.to_string(),
            date: entry.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Validate in form order, first failure wins:
    /// description, then amount, then date
    pub fn validate(&self) -> Result<EntryFields, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }

        let amount =
            Money::parse(&self.amount).map_err(|_| ValidationError::InvalidAmount)?;
        if !amount.is_positive() {
            return Err(ValidationError::InvalidAmount);
        }

        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::MissingDate)?;

        Ok(EntryFields {
            kind: self.kind,
            description: description.to_string(),
            amount,
            date,
        })
    }
}

/// What the form is currently doing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Adding a new entry
    #[default]
    Create,
    /// Editing the entry with this id
    Editing(EntryId),
}

/// Drives the add/edit form against the ledger
#[derive(Debug, Default)]
pub struct FormController {
    session: EditSession,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id being edited, if the form is in edit mode
    pub fn editing_id(&self) -> Option<&EntryId> {
        match &self.session {
            EditSession::Editing(id) => Some(id),
            EditSession::Create => None,
        }
    }

    /// Check if the form is in edit mode
    pub fn is_editing(&self) -> bool {
        matches!(self.session, EditSession::Editing(_))
    }

    /// Validate input and add a new entry at the front of the ledger
    ///
    /// A validation failure leaves both the ledger and the session
    /// untouched.
    pub fn add<S: KeyValueStore>(
        &mut self,
        store: &mut EntryStore<S>,
        input: &EntryInput,
    ) -> CashflowResult<Entry> {
        let fields = input.validate()?;
        self.session = EditSession::Create;
        store.add(fields)
    }

    /// Enter edit mode for an existing entry
    ///
    /// Returns a copy of the entry for prefilling the form; an unknown id
    /// leaves the session unchanged.
    pub fn start_edit<S: KeyValueStore>(
        &mut self,
        store: &EntryStore<S>,
        id: &EntryId,
    ) -> Option<Entry> {
        let entry = store.find(id)?.clone();
        self.session = EditSession::Editing(id.clone());
        Some(entry)
    }

    /// Validate input and overwrite the entry under edit
    ///
    /// Any outcome other than a validation failure returns the session to
    /// Create: a successful update, an update whose target has vanished,
    /// and the defensive case of no active session (a logged no-op).
    pub fn update<S: KeyValueStore>(
        &mut self,
        store: &mut EntryStore<S>,
        input: &EntryInput,
    ) -> CashflowResult<Option<Entry>> {
        let fields = input.validate()?;

        match mem::take(&mut self.session) {
            EditSession::Editing(id) => store.update(&id, fields),
            EditSession::Create => {
                warn!("Ignoring update with no active edit session");
                Ok(None)
            }
        }
    }

    /// Leave edit mode without touching the ledger
    pub fn cancel(&mut self) {
        self.session = EditSession::Create;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn input(kind: EntryKind, description: &str, amount: &str, date: &str) -> EntryInput {
        EntryInput {
            kind,
            description: description.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
        }
    }

    fn valid_input(description: &str) -> EntryInput {
        input(EntryKind::Income, description, "100.50", "2024-01-15")
    }

    #[test]
    fn test_validation_order_description_first() {
        // Both description and amount are bad; the description message wins
        let result = input(EntryKind::Income, "   ", "garbage", "").validate();
        assert_eq!(result.unwrap_err(), ValidationError::MissingDescription);
    }

    #[test]
    fn test_validation_amount_must_be_positive() {
        for bad in ["0", "-5", "abc", ""] {
            let result = input(EntryKind::Income, "Chai", bad, "2024-01-15").validate();
            assert_eq!(result.unwrap_err(), ValidationError::InvalidAmount, "{}", bad);
        }
    }

    #[test]
    fn test_validation_rejects_malformed_amounts_without_crashing() {
        // Typed currency symbols and absurdly large amounts are user input
        // like any other; they get the amount message, never a panic
        for bad in ["10.5₹", "₹40", "99999999999999999.99", "10.-5"] {
            let result = input(EntryKind::Income, "Chai", bad, "2024-01-15").validate();
            assert_eq!(result.unwrap_err(), ValidationError::InvalidAmount, "{}", bad);
        }
    }

    #[test]
    fn test_validation_date_checked_last() {
        let result = input(EntryKind::Income, "Chai", "40", "").validate();
        assert_eq!(result.unwrap_err(), ValidationError::MissingDate);

        let result = input(EntryKind::Income, "Chai", "40", "yesterday").validate();
        assert_eq!(result.unwrap_err(), ValidationError::MissingDate);
    }

    #[test]
    fn test_validation_trims_description() {
        let fields = input(EntryKind::Expense, "  Chai  ", "40", "2024-01-15")
            .validate()
            .unwrap();
        assert_eq!(fields.description, "Chai");
        assert_eq!(fields.amount, Money::from_cents(4000));
    }

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingDescription.to_string(),
            "Please enter a description"
        );
        assert_eq!(ValidationError::InvalidAmount.to_string(), "Enter a valid amount");
        assert_eq!(ValidationError::MissingDate.to_string(), "Please select a date");
    }

    #[test]
    fn test_add() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let entry = form.add(&mut store, &valid_input("Salary")).unwrap();
        assert_eq!(entry.description, "Salary");
        assert_eq!(store.len(), 1);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_add_validation_failure_mutates_nothing() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let err = form
            .add(&mut store, &input(EntryKind::Income, "", "100", "2024-01-15"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_start_edit_then_update() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let entry = form.add(&mut store, &valid_input("Salary")).unwrap();

        let prefill = form.start_edit(&store, &entry.id).unwrap();
        assert_eq!(prefill.description, "Salary");
        assert!(form.is_editing());

        let updated = form
            .update(&mut store, &input(EntryKind::Expense, "Rent", "800", "2024-02-01"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.description, "Rent");
        assert_eq!(updated.kind, EntryKind::Expense);
        assert!(!form.is_editing());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_start_edit_unknown_id_leaves_session() {
        let store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        assert!(form.start_edit(&store, &EntryId::from("missing")).is_none());
        assert!(!form.is_editing());
    }

    #[test]
    fn test_update_validation_failure_keeps_session() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let entry = form.add(&mut store, &valid_input("Salary")).unwrap();
        form.start_edit(&store, &entry.id);

        let err = form
            .update(&mut store, &input(EntryKind::Income, "", "100", "2024-01-15"))
            .unwrap_err();
        assert!(err.is_validation());

        // Still editing; the user can fix the input and retry
        assert_eq!(form.editing_id(), Some(&entry.id));
        assert_eq!(store.all()[0].description, "Salary");
    }

    #[test]
    fn test_update_without_session_is_noop() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();
        form.add(&mut store, &valid_input("Salary")).unwrap();

        let result = form.update(&mut store, &valid_input("Changed")).unwrap();
        assert!(result.is_none());
        assert_eq!(store.all()[0].description, "Salary");
    }

    #[test]
    fn test_update_stale_id_clears_session() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let entry = form.add(&mut store, &valid_input("Salary")).unwrap();
        form.start_edit(&store, &entry.id);

        // The entry disappears behind the form's back
        store.remove(&entry.id).unwrap();

        let result = form.update(&mut store, &valid_input("Changed")).unwrap();
        assert!(result.is_none());
        assert!(!form.is_editing());
    }

    #[test]
    fn test_cancel() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let entry = form.add(&mut store, &valid_input("Salary")).unwrap();
        form.start_edit(&store, &entry.id);
        form.cancel();

        assert!(!form.is_editing());
        assert_eq!(store.all()[0].description, "Salary");
    }

    #[test]
    fn test_prefill_round_trips() {
        let mut store = EntryStore::open(MemoryStore::new());
        let mut form = FormController::new();

        let entry = form
            .add(&mut store, &input(EntryKind::Expense, "Groceries", "450.50", "2024-01-15"))
            .unwrap();

        let prefill = EntryInput::from_entry(&entry);
        assert_eq!(prefill.amount, "450.50");
        assert_eq!(prefill.date, "2024-01-15");

        // Prefilled values validate unchanged
        let fields = prefill.validate().unwrap();
        assert_eq!(fields.amount, entry.amount);
        assert_eq!(fields.date, entry.date);
    }
}

//! Application state for the TUI
//!
//! The App struct owns the ledger and everything needed for rendering and
//! handling events. It is generic over the backing store so the whole
//! state machine can run against an in-memory store in tests.

use crate::config::Settings;
use crate::error::CashflowError;
use crate::models::{Entry, EntryId};
use crate::services::{EntryInput, FormController};
use crate::storage::{EntryStore, KeyValueStore};
use crate::view::{EntryFilter, Snapshot};

use super::dialogs::entry::EntryFormState;
use super::widgets::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// The shared add/edit entry form
    EntryForm,
    /// Confirmation before deleting the entry with this id
    ConfirmDelete(EntryId),
    Help,
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// The ledger
    pub store: EntryStore<S>,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Active type filter for the list
    pub filter: EntryFilter,

    /// Filtered view of the ledger, recaptured after every change
    pub snapshot: Snapshot,

    /// Selected row in the entry list
    pub selected_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Add/edit session tracking
    pub form: FormController,

    /// Field state for the entry form dialog
    pub entry_form: EntryFormState,

    /// Pending toasts
    pub notifications: NotificationQueue,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new App over an opened ledger
    pub fn new(store: EntryStore<S>, settings: Settings) -> Self {
        let filter = EntryFilter::default();
        let snapshot = Snapshot::capture(store.all(), filter);
        Self {
            store,
            settings,
            should_quit: false,
            filter,
            snapshot,
            selected_index: 0,
            active_dialog: ActiveDialog::default(),
            form: FormController::new(),
            entry_form: EntryFormState::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Recapture the snapshot and keep the selection in bounds
    pub fn refresh(&mut self) {
        self.snapshot = Snapshot::capture(self.store.all(), self.filter);
        let len = self.snapshot.entries.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// The entry under the cursor, if the filtered list is non-empty
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.snapshot.entries.get(self.selected_index)
    }

    /// Move the selection up
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move the selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.snapshot.entries.len() {
            self.selected_index += 1;
        }
    }

    /// Jump to the first row
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last row
    pub fn select_last(&mut self) {
        self.selected_index = self.snapshot.entries.len().saturating_sub(1);
    }

    /// Switch the list to a specific filter
    pub fn set_filter(&mut self, filter: EntryFilter) {
        self.filter = filter;
        self.selected_index = 0;
        self.refresh();
    }

    /// Cycle the filter: all, income, expense
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Open the form for a new entry
    pub fn open_add_dialog(&mut self) {
        self.entry_form = EntryFormState::new();
        self.active_dialog = ActiveDialog::EntryForm;
    }

    /// Open the form prefilled with the selected entry
    pub fn open_edit_dialog(&mut self) {
        let Some(id) = self.selected_entry().map(|entry| entry.id.clone()) else {
            return;
        };
        if let Some(entry) = self.form.start_edit(&self.store, &id) {
            self.entry_form = EntryFormState::from_entry(&entry);
            self.active_dialog = ActiveDialog::EntryForm;
        }
    }

    /// Ask for confirmation before deleting the selected entry
    pub fn open_delete_dialog(&mut self) {
        if let Some(entry) = self.selected_entry() {
            self.active_dialog = ActiveDialog::ConfirmDelete(entry.id.clone());
        }
    }

    /// Open the help dialog
    pub fn open_help_dialog(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    /// Close the entry form without saving
    pub fn cancel_entry_form(&mut self) {
        self.form.cancel();
        self.close_dialog();
    }

    /// Validate the form and apply it as an add or an update
    pub fn submit_entry_form(&mut self) {
        let input = self.entry_form.input();
        if self.form.is_editing() {
            self.apply_update(&input);
        } else {
            self.apply_add(&input);
        }
    }

    fn apply_add(&mut self, input: &EntryInput) {
        match self.form.add(&mut self.store, input) {
            Ok(_) => {
                self.close_dialog();
                self.refresh();
                self.notify(Notification::success("Entry added!"));
            }
            Err(err) => self.report_form_failure(err, "Entry added"),
        }
    }

    fn apply_update(&mut self, input: &EntryInput) {
        match self.form.update(&mut self.store, input) {
            Ok(Some(_)) => {
                self.close_dialog();
                self.refresh();
                self.notify(Notification::success("Entry updated!"));
            }
            Ok(None) => {
                // The entry vanished while the form was open
                self.close_dialog();
                self.refresh();
                self.notify(Notification::warning("Entry no longer exists"));
            }
            Err(err) => self.report_form_failure(err, "Entry updated"),
        }
    }

    /// A validation failure keeps the dialog open for correction; any other
    /// failure means the change applied in memory but did not reach disk.
    fn report_form_failure(&mut self, err: CashflowError, applied: &str) {
        if err.is_validation() {
            self.notify(Notification::error(err.to_string()));
        } else {
            self.close_dialog();
            self.refresh();
            self.notify(Notification::warning(format!(
                "{applied}, but saving failed: {err}"
            )));
        }
    }

    /// Delete an entry after the user confirmed
    pub fn delete_entry(&mut self, id: &EntryId) {
        match self.store.remove(id) {
            Ok(true) => {
                self.refresh();
                self.notify(Notification::success("Entry deleted"));
            }
            Ok(false) => {
                self.refresh();
                self.notify(Notification::warning("Entry no longer exists"));
            }
            Err(err) => {
                self.refresh();
                self.notify(Notification::warning(format!(
                    "Entry deleted, but saving failed: {err}"
                )));
            }
        }
    }

    /// Queue a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Periodic housekeeping, driven by the event loop
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}

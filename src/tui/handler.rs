//! Key routing for the TUI
//!
//! Dialogs get first claim on every key; the list keys only apply when no
//! dialog is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::models::EntryId;
use crate::storage::KeyValueStore;
use crate::view::EntryFilter;

use super::app::{ActiveDialog, App};
use super::dialogs;

/// Handle a key event
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    // Check if we're in a dialog first
    match app.active_dialog.clone() {
        ActiveDialog::EntryForm => dialogs::entry::handle_key(app, key),
        ActiveDialog::ConfirmDelete(id) => handle_confirm_delete_key(app, key, id),
        ActiveDialog::Help => handle_help_key(app, key),
        ActiveDialog::None => handle_list_key(app, key),
    }
}

/// Handle keys while the delete confirmation is open
fn handle_confirm_delete_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent, id: EntryId) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            app.delete_entry(&id);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// Handle keys while the help overlay is open
fn handle_help_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// Handle keys in the entry list
fn handle_list_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_help_dialog(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Mutations
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_dialog(),

        // Filter
        KeyCode::Char('f') | KeyCode::Tab => app.cycle_filter(),
        KeyCode::Char('1') => app.set_filter(EntryFilter::All),
        KeyCode::Char('2') => app.set_filter(EntryFilter::Income),
        KeyCode::Char('3') => app.set_filter(EntryFilter::Expense),

        _ => {}
    }
}

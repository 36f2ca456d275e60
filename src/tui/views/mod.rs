//! TUI views
//!
//! The main screen: totals strip, entry list, and status bar, plus whatever
//! dialog or toast is active. Everything renders from the app's snapshot.

pub mod entries;
pub mod status_bar;
pub mod totals;

use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{bottom_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>) {
    let layout = AppLayout::new(frame.area());

    totals::render(frame, app, layout.totals);
    entries::render(frame, app, layout.entries);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match &app.active_dialog {
        ActiveDialog::EntryForm => dialogs::entry::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(frame, app, id),
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }

    // Toast on top of everything
    if let Some(notification) = app.notifications.current() {
        let width = (notification.message.len() as u16 + 4).max(20);
        let area = bottom_right_rect(width, 3, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

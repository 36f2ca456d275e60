//! Terminal user interface
//!
//! Interactive mode built on ratatui: the entry list with its totals strip,
//! the shared add/edit form, delete confirmation, and toast notifications.

pub mod app;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;

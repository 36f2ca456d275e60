//! Dialog modules for the TUI
//!
//! Contains the modal dialogs: the shared add/edit entry form, the delete
//! confirmation, and the help overlay.

pub mod confirm;
pub mod entry;
pub mod help;

//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries and totals for terminal
//! display, including the tabular list view.

pub mod entry;
pub mod format;
pub mod summary;

pub use entry::{format_entry_line, format_entry_table, EntryRow};
pub use format::{format_amount, format_balance, format_date, format_entry_amount};
pub use summary::format_totals;

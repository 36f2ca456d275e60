//! Entry list formatting for terminal output

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::Entry;
use crate::view::Snapshot;

use super::format::{format_date, format_entry_amount};

/// One row of the entry table
#[derive(Debug, Clone, Tabled)]
pub struct EntryRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Type")]
    pub kind: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl EntryRow {
    /// Build a display row from an entry
    pub fn from_entry(entry: &Entry, settings: &Settings) -> Self {
        Self {
            id: entry.id.to_string(),
            date: format_date(entry.date, &settings.date_format),
            kind: entry.kind.to_string(),
            description: entry.description.clone(),
            amount: format_entry_amount(entry, &settings.currency_symbol),
        }
    }
}

/// Format the visible entries as a table, or the empty-state message
pub fn format_entry_table(snapshot: &Snapshot, settings: &Settings) -> String {
    if snapshot.is_empty() {
        return format!("{}\n", snapshot.empty_message());
    }

    let rows: Vec<EntryRow> = snapshot
        .entries
        .iter()
        .map(|entry| EntryRow::from_entry(entry, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// One-line confirmation of an entry, used after add/update
pub fn format_entry_line(entry: &Entry, settings: &Settings) -> String {
    format!(
        "{}  {}  {}  ({})",
        entry.id,
        format_date(entry.date, &settings.date_format),
        entry.description,
        format_entry_amount(entry, &settings.currency_symbol)
    )
}

//! Entry list view
//!
//! Table of the visible entries, newest first, with the active filter in
//! the title and the selection highlighted.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_date, format_entry_amount};
use crate::models::EntryKind;
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::view::EntryFilter;

/// Render the entry list
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let title = list_title(app.filter);
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.snapshot.is_empty() {
        let text = Paragraph::new(format!("{} Press 'a' to add one.", app.snapshot.empty_message()))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12),     // Date
        Constraint::Length(8),      // Type
        Constraint::Min(20),        // Description
        Constraint::Length(16),     // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Type").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let date_format = &app.settings.date_format;

    let rows: Vec<Row> = app
        .snapshot
        .entries
        .iter()
        .map(|entry| {
            let amount_color = match entry.kind {
                EntryKind::Income => Color::Green,
                EntryKind::Expense => Color::Red,
            };
            Row::new(vec![
                Cell::from(format_date(entry.date, date_format)),
                Cell::from(entry.kind.to_string()),
                Cell::from(entry.description.clone()),
                Cell::from(format_entry_amount(entry, symbol))
                    .style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// List title carrying the active filter
fn list_title(filter: EntryFilter) -> String {
    match filter {
        EntryFilter::All => " Entries ".to_string(),
        EntryFilter::Income => " Entries - Income ".to_string(),
        EntryFilter::Expense => " Entries - Expense ".to_string(),
    }
}

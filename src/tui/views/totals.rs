//! Totals strip
//!
//! Three cards across the top: total income, total expense, and the net
//! balance. Totals always cover the whole ledger, whatever the filter.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_amount, format_balance};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::TotalsLayout;

/// Render the totals strip
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let layout = TotalsLayout::new(area);
    let totals = &app.snapshot.totals;
    let symbol = &app.settings.currency_symbol;

    let balance_color = if totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Cyan
    };

    render_card(
        frame,
        layout.income,
        "Income",
        format_amount(totals.income, symbol),
        Color::Green,
    );
    render_card(
        frame,
        layout.expense,
        "Expense",
        format_amount(totals.expense, symbol),
        Color::Red,
    );
    render_card(
        frame,
        layout.balance,
        "Balance",
        format_balance(totals.balance, symbol),
        balance_color,
    );
}

/// Render one labelled amount card
fn render_card(frame: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(value)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

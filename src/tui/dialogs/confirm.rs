//! Delete confirmation dialog
//!
//! Yes/no confirmation shown before an entry is removed.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_entry_amount;
use crate::models::EntryId;
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the delete confirmation dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, id: &EntryId) {
    let area = centered_rect_fixed(50, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Entry ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let detail = app
        .store
        .find(id)
        .map(|entry| {
            format!(
                "{} ({})",
                entry.description,
                format_entry_amount(entry, &app.settings.currency_symbol)
            )
        })
        .unwrap_or_else(|| "This entry".to_string());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete {}?", detail),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Red)),
            Span::raw(" Delete  "),
            Span::styled("[N]", Style::default().fg(Color::Green)),
            Span::raw(" Keep  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

//! Help dialog
//!
//! Keyboard shortcut overview.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 18, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        section("Entries"),
        Line::from(""),
        key_line("a / n", "Add a new entry"),
        key_line("e / Enter", "Edit the selected entry"),
        key_line("d / Del", "Delete the selected entry"),
        Line::from(""),
        section("List"),
        Line::from(""),
        key_line("j/k or arrows", "Move selection"),
        key_line("g / G", "First / last entry"),
        key_line("f / Tab", "Cycle filter"),
        key_line("1 / 2 / 3", "All / Income / Expense"),
        Line::from(""),
        section("General"),
        Line::from(""),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Section heading line
fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// One "key: description" line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}

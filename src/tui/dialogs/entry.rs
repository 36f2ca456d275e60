//! Entry add/edit dialog
//!
//! Modal form for a single entry: type, description, amount, date. The
//! same dialog serves adds and edits; the app's form controller tracks
//! which one is in flight.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Entry, EntryKind};
use crate::services::EntryInput;
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Kind,
    Description,
    Amount,
    Date,
}

impl EntryField {
    /// The next field, for Tab navigation
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Kind,
        }
    }

    /// The previous field, for Shift+Tab navigation
    pub fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Date,
            Self::Description => Self::Kind,
            Self::Amount => Self::Description,
            Self::Date => Self::Amount,
        }
    }
}

/// State for the entry form dialog
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Currently focused field
    pub focused_field: EntryField,
    /// Selected entry type
    pub kind: EntryKind,
    /// Description input
    pub description_input: TextInput,
    /// Amount input
    pub amount_input: TextInput,
    /// Date input
    pub date_input: TextInput,
    /// Whether this form edits an existing entry
    pub is_edit: bool,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create a fresh form for a new entry, dated today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: EntryField::default(),
            kind: EntryKind::default(),
            description_input: TextInput::new().placeholder("What was it for?"),
            amount_input: TextInput::new().placeholder("0.00"),
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            is_edit: false,
        };
        state.update_focus();
        state
    }

    /// Create a form prefilled from an existing entry
    pub fn from_entry(entry: &Entry) -> Self {
        let input = EntryInput::from_entry(entry);
        let mut state = Self {
            focused_field: EntryField::default(),
            kind: input.kind,
            description_input: TextInput::new().content(input.description),
            amount_input: TextInput::new().content(input.amount),
            date_input: TextInput::new().content(input.date),
            is_edit: true,
        };
        state.update_focus();
        state
    }

    /// The raw input as the user typed it
    pub fn input(&self) -> EntryInput {
        EntryInput {
            kind: self.kind,
            description: self.description_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
            date: self.date_input.value().to_string(),
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.description_input.focused = self.focused_field == EntryField::Description;
        self.amount_input.focused = self.focused_field == EntryField::Amount;
        self.date_input.focused = self.focused_field == EntryField::Date;
    }

    /// Flip between income and expense
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    /// The text input under focus; none while the type selector is focused
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EntryField::Kind => None,
            EntryField::Description => Some(&mut self.description_input),
            EntryField::Amount => Some(&mut self.amount_input),
            EntryField::Date => Some(&mut self.date_input),
        }
    }
}

/// Handle a key event while the entry form is open
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    let form = &mut app.entry_form;

    match key.code {
        KeyCode::Esc => {
            app.cancel_entry_form();
        }

        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            form.prev_field();
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
        }

        KeyCode::Enter => {
            app.submit_entry_form();
        }

        // The type selector toggles instead of moving a cursor
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if form.focused_field == EntryField::Kind =>
        {
            form.toggle_kind();
        }
        KeyCode::Char('i') | KeyCode::Char('I')
            if form.focused_field == EntryField::Kind =>
        {
            form.kind = EntryKind::Income;
        }
        KeyCode::Char('e') | KeyCode::Char('E')
            if form.focused_field == EntryField::Kind =>
        {
            form.kind = EntryKind::Expense;
        }

        KeyCode::Backspace => {
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Render the entry form dialog
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = centered_rect_fixed(60, 9, frame.area());

    frame.render_widget(Clear, area);

    let title = if app.entry_form.is_edit {
        " Edit Entry "
    } else {
        " Add Entry "
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.entry_form;
    let amount_label = format!("Amount ({})", app.settings.currency_symbol);

    render_kind_field(frame, chunks[0], form);
    render_text_field(frame, chunks[1], "Description", &form.description_input);
    render_text_field(frame, chunks[2], &amount_label, &form.amount_input);
    render_text_field(frame, chunks[3], "Date", &form.date_input);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Render the income/expense selector line
fn render_kind_field(frame: &mut Frame, area: Rect, form: &EntryFormState) {
    let focused = form.focused_field == EntryField::Kind;

    let selected = |color| {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    };
    let unselected = Style::default().fg(Color::DarkGray);

    let (income_style, expense_style) = match form.kind {
        EntryKind::Income => (selected(Color::Green), unselected),
        EntryKind::Expense => (unselected, selected(Color::Red)),
    };

    let mut spans = vec![
        field_label("Type", focused),
        Span::styled(" Income ", income_style),
        Span::raw("  "),
        Span::styled(" Expense ", expense_style),
    ];
    if focused {
        spans.push(Span::styled(
            "  (space to switch)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a label plus a text input, drawing the cursor when focused
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput) {
    let value = input.value();

    let value_style = if input.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![field_label(label, input.focused)];

    if input.focused {
        let split_at = input
            .content
            .char_indices()
            .map(|(i, _)| i)
            .nth(input.cursor)
            .unwrap_or(value.len());
        let (before, after) = value.split_at(split_at);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest: String = after.chars().skip(1).collect();
        if !rest.is_empty() {
            spans.push(Span::styled(rest, value_style));
        }
    } else if value.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(value.to_string(), value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Styled right-aligned field label
fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{:>11}: ", label), style)
}

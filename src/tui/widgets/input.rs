//! Single-line text input state
//!
//! Holds the content and cursor for one form field. Rendering is done by
//! the dialogs, which draw the label, value and cursor themselves.

/// A single-line text input with cursor editing
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current content of the input
    pub content: String,
    /// Cursor position, counted in characters
    pub cursor: usize,
    /// Whether this input currently has focus
    pub focused: bool,
    /// Placeholder text shown when empty
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text (builder style)
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial content, with the cursor at the end (builder style)
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.chars().count();
        self
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Number of characters in the content
    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the cursor into the content
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Move the cursor one character left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content and reset the cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }
}

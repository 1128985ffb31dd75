use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::theme;

pub const PLACEHOLDER: &str = "Search stocks ...";

/// Single-line search field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn insert_str(&mut self, text: &str) {
        // Newlines would split the field into several lines
        let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.textarea.insert_str(single_line);
    }

    /// Feed a key to the editor, returns true when the text changed
    ///
    /// Enter must be handled by the caller; it is never forwarded here.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.query().to_string();
        self.textarea.input(key);
        self.query() != before
    }
}

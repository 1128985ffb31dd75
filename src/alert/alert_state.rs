use ratatui::crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Default)]
pub struct AlertState {
    message: Option<String>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        log::debug!("Alert: {}", message);
        self.message = Some(message.to_string());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle a key while the alert is up
    ///
    /// Enter, Esc and Space dismiss. Every key is consumed.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.dismiss();
        }
    }
}

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::alert::NO_RESULTS_MESSAGE;
use crate::navigation::{BackOutcome, Route};
use crate::search::{Document, SearchEvent};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Send any debounced request that is due and apply finished responses
    pub fn tick(&mut self) {
        self.search.dispatch_due();

        for event in self.search.poll_response() {
            self.handle_search_event(event);
        }
    }

    fn handle_search_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::ResultsUpdated => {
                self.results_list.reset(self.search.results().len());
                if self.search.results().is_empty() {
                    self.focus = Focus::InputField;
                }
            }
            SearchEvent::SubmitResolved { query, results } => {
                match results.into_iter().next() {
                    Some(first) => self.navigate_to(first.document),
                    None => {
                        log::debug!("Submit for '{}' found nothing", query);
                        self.alert.show(NO_RESULTS_MESSAGE);
                    }
                }
            }
            SearchEvent::SubmitFailed { query, message } => {
                log::debug!("Submit for '{}' failed: {}", query, message);
                self.alert.show(&message);
            }
            SearchEvent::WorkerFailed(message) => {
                self.notification.show_error(&message);
            }
        }
    }

    fn handle_paste_event(&mut self, text: String) {
        if self.alert.is_visible() || self.router.current().is_some() {
            return;
        }
        self.focus = Focus::InputField;
        self.input.insert_str(&text);
        self.on_query_changed();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_visible() {
            self.alert.handle_key(key);
            return;
        }

        if self.router.current().is_some() {
            self.handle_detail_key(key);
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsList => self.handle_results_list_key(key),
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.focus_results(),
            _ => {
                if self.input.handle_key(key) {
                    self.on_query_changed();
                }
            }
        }
    }

    fn handle_results_list_key(&mut self, key: KeyEvent) {
        let len = self.search.results().len();
        match key.code {
            KeyCode::Enter => {
                if let Some(index) = self.results_list.selected() {
                    self.select_row(index);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.results_list.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.results_list.select_previous() {
                    self.focus = Focus::InputField;
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.focus = Focus::InputField,
            _ => {
                // Typing anywhere goes to the search field
                self.focus = Focus::InputField;
                self.handle_input_field_key(key);
            }
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('q')
        ) {
            self.go_back();
        }
    }

    fn focus_results(&mut self) {
        let len = self.search.results().len();
        if self.search.query().is_empty() || len == 0 {
            return;
        }
        self.results_list.clamp(len);
        self.focus = Focus::ResultsList;
    }

    /// Submit the current query; navigation or the alert follows when it resolves
    pub fn submit(&mut self) {
        let query = self.input.query().to_string();
        if let Some(event) = self.search.submit(&query) {
            self.handle_search_event(event);
        }
    }

    /// Navigate to the detail route of the result at `index`
    pub fn select_row(&mut self, index: usize) {
        if let Some(result) = self.search.results().get(index) {
            let document = result.document.clone();
            self.navigate_to(document);
        }
    }

    fn navigate_to(&mut self, document: Document) {
        self.router.push(Route::for_document(document));
        if self.exit_on_navigate {
            self.should_quit = true;
        }
    }

    pub fn go_back(&mut self) {
        if self.router.back() == BackOutcome::LeftRoot {
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

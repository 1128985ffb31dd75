//! Shared test utilities for tickr
//!
//! Provides an `App` wired to in-memory channels so tests play the part of
//! the search worker without any network access.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{Receiver, Sender, channel};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::search::worker::{SearchRequest, SearchResponse};
    use crate::search::{Document, SearchResults, SearchState};

    /// Stand-in for the background search worker
    pub struct FakeWorker {
        pub request_rx: Receiver<SearchRequest>,
        pub response_tx: Sender<SearchResponse>,
    }

    impl FakeWorker {
        /// Take the next request the app sent, panicking if there is none
        pub fn next_request(&self) -> SearchRequest {
            self.request_rx
                .try_recv()
                .expect("expected a search request")
        }

        pub fn has_request(&self) -> bool {
            self.request_rx.try_recv().is_ok()
        }

        pub fn reply(&self, request: &SearchRequest, results: Vec<SearchResults>) {
            self.response_tx
                .send(SearchResponse::Success {
                    results,
                    query: request.query.clone(),
                    request_id: request.request_id,
                    kind: request.kind,
                })
                .unwrap();
        }

        pub fn fail(&self, request: &SearchRequest, message: &str) {
            self.response_tx
                .send(SearchResponse::Error {
                    message: message.to_string(),
                    query: request.query.clone(),
                    request_id: request.request_id,
                    kind: request.kind,
                })
                .unwrap();
        }
    }

    /// App with a zero-delay debouncer and a fake worker
    pub fn test_app() -> (App, FakeWorker) {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let search = SearchState::with_channels(0, request_tx, response_rx);
        (
            App::new(search, false),
            FakeWorker {
                request_rx,
                response_tx,
            },
        )
    }

    pub fn result(ticker: &str, name: &str, country: &str) -> SearchResults {
        SearchResults {
            document: Document {
                id: ticker.to_string(),
                ticker: ticker.to_string(),
                name: name.to_string(),
                country: country.to_string(),
                ..Document::default()
            },
        }
    }

    /// A few well-known results in service order
    pub fn sample_results() -> Vec<SearchResults> {
        vec![
            result("AAPL", "Apple Inc.", "US"),
            result("APP", "AppLovin Corporation", "US"),
            result("ASML", "ASML Holding N.V.", "NL"),
        ]
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type each character of `text` into the app
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Type `query`, let the live request go out and answer it with `results`
    pub fn app_with_results(query: &str, results: Vec<SearchResults>) -> (App, FakeWorker) {
        let (mut app, worker) = test_app();
        type_text(&mut app, query);
        app.tick();
        let request = worker.next_request();
        worker.reply(&request, results);
        app.tick();
        (app, worker)
    }
}

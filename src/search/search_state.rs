use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use tokio_util::sync::CancellationToken;

use super::client::SearchClient;
use super::debouncer::Debouncer;
use super::document::SearchResults;
use super::worker::{RequestKind, SearchRequest, SearchResponse, spawn_worker};

/// Something the screen has to react to after polling the worker
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Live results for the current query were replaced
    ResultsUpdated,
    /// A submitted search completed
    SubmitResolved {
        query: String,
        results: Vec<SearchResults>,
    },
    /// A submitted search failed
    SubmitFailed { query: String, message: String },
    /// The worker crashed or went away; no further searches will run
    WorkerFailed(String),
}

/// A request that has been sent and not yet answered
#[derive(Debug)]
struct InFlight {
    request_id: u64,
    query: String,
    cancel_token: CancellationToken,
}

impl InFlight {
    fn cancel(self) {
        self.cancel_token.cancel();
        log::debug!("Cancelled request {} ({})", self.request_id, self.query);
    }
}

/// Live search state: the query being typed and the results shown for it
pub struct SearchState {
    query: String,
    results: Vec<SearchResults>,
    debouncer: Debouncer,

    /// Channel to send search requests to worker
    request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive search responses from worker
    response_rx: Option<Receiver<SearchResponse>>,
    /// Next request ID (starts at 1, 0 reserved for worker errors)
    next_request_id: u64,
    in_flight: Option<InFlight>,
    pending_submit: Option<InFlight>,
    worker_error: Option<String>,
}

impl SearchState {
    /// Create search state backed by a background worker using `client`
    pub fn new(client: SearchClient, debounce_ms: u64) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        spawn_worker(client, request_rx, response_tx);

        Self::with_channels(debounce_ms, request_tx, response_rx)
    }

    /// Create search state talking to whatever sits on the other end of the channels
    pub fn with_channels(
        debounce_ms: u64,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            debouncer: Debouncer::new(debounce_ms),
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 1,
            in_flight: None,
            pending_submit: None,
            worker_error: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResults] {
        &self.results
    }

    /// True while a live request is scheduled or waiting for its response
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some() || self.debouncer.has_pending()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub fn worker_error(&self) -> Option<&str> {
        self.worker_error.as_deref()
    }

    /// Record a new query string
    ///
    /// An empty query clears the results immediately and sends nothing.
    /// Anything else is scheduled through the debouncer.
    pub fn set_query(&mut self, query: &str) {
        if query == self.query {
            return;
        }
        self.query = query.to_string();

        if self.query.is_empty() {
            self.debouncer.cancel();
            self.cancel_in_flight();
            self.results.clear();
            return;
        }

        self.debouncer.schedule_execution();
    }

    /// Dispatch the live request if the debounce period has elapsed
    ///
    /// Returns true when a request was sent.
    pub fn dispatch_due(&mut self) -> bool {
        if !self.debouncer.should_execute() {
            return false;
        }
        self.debouncer.mark_executed();

        let query = self.query.clone();
        match self.send_request(&query, RequestKind::Live) {
            Some(in_flight) => {
                self.cancel_in_flight();
                self.in_flight = Some(in_flight);
                true
            }
            None => false,
        }
    }

    /// Submit a query; its outcome arrives later as a `SearchEvent`
    ///
    /// An empty query has no results by definition, so it resolves at once.
    pub fn submit(&mut self, query: &str) -> Option<SearchEvent> {
        if query.is_empty() {
            return Some(SearchEvent::SubmitResolved {
                query: String::new(),
                results: Vec::new(),
            });
        }

        if let Some(previous) = self.pending_submit.take() {
            previous.cancel();
        }

        // The worker is serial, so a live fetch would hold the submit back.
        // Re-run it once the submit is through.
        if self.in_flight.is_some() {
            self.cancel_in_flight();
            self.debouncer.schedule_execution();
        }

        match self.send_request(query, RequestKind::Submit) {
            Some(in_flight) => {
                self.pending_submit = Some(in_flight);
                None
            }
            None => Some(SearchEvent::SubmitFailed {
                query: query.to_string(),
                message: self
                    .worker_error
                    .clone()
                    .unwrap_or_else(|| "Search worker disconnected".to_string()),
            }),
        }
    }

    /// Cancel the live request if any
    pub fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel();
        }
    }

    fn allocate_request_id(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker errors)
        if self.next_request_id == 0 {
            self.next_request_id = 1;
        }
        request_id
    }

    fn send_request(&mut self, query: &str, kind: RequestKind) -> Option<InFlight> {
        let tx = match self.request_tx.as_ref() {
            Some(tx) => tx.clone(),
            None => {
                log::error!("No request channel available");
                return None;
            }
        };

        let request_id = self.allocate_request_id();
        let cancel_token = CancellationToken::new();

        log::debug!("Sending {:?} request {} for query: {}", kind, request_id, query);

        let request = SearchRequest {
            query: query.to_string(),
            request_id,
            kind,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(request).is_err() {
            log::error!("Search worker disconnected - send failed");
            self.disconnect("Search worker disconnected");
            return None;
        }

        Some(InFlight {
            request_id,
            query: query.to_string(),
            cancel_token,
        })
    }

    fn disconnect(&mut self, message: &str) {
        self.request_tx = None;
        self.response_rx = None;
        self.in_flight = None;
        self.pending_submit = None;
        self.worker_error = Some(message.to_string());
    }

    /// Drain worker responses (non-blocking)
    ///
    /// Call this in the main event loop. Returns the events the screen must act on.
    pub fn poll_response(&mut self) -> Vec<SearchEvent> {
        let mut events = Vec::new();

        let rx = match self.response_rx.take() {
            Some(rx) => rx,
            None => return events,
        };

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    if let Some(event) = self.process_response(response) {
                        events.push(event);
                    }
                }
                Err(TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Search worker disconnected in poll_response");
                    let message = self
                        .worker_error
                        .clone()
                        .unwrap_or_else(|| "Search worker disconnected".to_string());
                    self.disconnect(&message);
                    events.push(SearchEvent::WorkerFailed(message));
                    break;
                }
            }
        }

        events
    }

    fn process_response(&mut self, response: SearchResponse) -> Option<SearchEvent> {
        if let SearchResponse::Error {
            request_id: 0,
            message,
            ..
        } = &response
        {
            self.worker_error = Some(message.clone());
            return Some(SearchEvent::WorkerFailed(message.clone()));
        }

        match response.kind() {
            RequestKind::Live => self.process_live_response(response),
            RequestKind::Submit => self.process_submit_response(response),
        }
    }

    fn process_live_response(&mut self, response: SearchResponse) -> Option<SearchEvent> {
        let request_id = response.request_id();
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.request_id == request_id);

        if !is_current {
            log::debug!("Discarding stale response for request {}", request_id);
            return None;
        }
        self.in_flight = None;

        match response {
            SearchResponse::Success { results, query, .. } => {
                if query != self.query {
                    log::debug!(
                        "Discarding results for '{}', current query is '{}'",
                        query,
                        self.query
                    );
                    return None;
                }
                self.results = results;
                Some(SearchEvent::ResultsUpdated)
            }
            SearchResponse::Error { message, query, .. } => {
                // Live typing keeps whatever is on screen
                log::debug!("Live search for '{}' failed: {}", query, message);
                None
            }
            SearchResponse::Cancelled { .. } => None,
        }
    }

    fn process_submit_response(&mut self, response: SearchResponse) -> Option<SearchEvent> {
        let request_id = response.request_id();
        let is_current = self
            .pending_submit
            .as_ref()
            .is_some_and(|pending| pending.request_id == request_id);

        if !is_current {
            log::debug!("Discarding superseded submit response {}", request_id);
            return None;
        }
        self.pending_submit = None;

        match response {
            SearchResponse::Success { results, query, .. } => {
                Some(SearchEvent::SubmitResolved { query, results })
            }
            SearchResponse::Error { message, query, .. } => {
                Some(SearchEvent::SubmitFailed { query, message })
            }
            SearchResponse::Cancelled { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;

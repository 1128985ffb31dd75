//! Search Worker Thread
//!
//! Owns a single-threaded tokio runtime and the HTTP client. Requests are
//! handled one at a time; each fetch races against its cancellation token.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::sync::mpsc::{Receiver, Sender};

use super::types::{RequestKind, SearchRequest, SearchResponse};
use crate::search::client::{SearchClient, SearchError};

static INSTALL_PANIC_HOOK: Once = Once::new();

thread_local! {
    /// Set only on worker threads; the panic hook reports through it
    static PANIC_REPORTER: RefCell<Option<Sender<SearchResponse>>> = const { RefCell::new(None) };
}

/// Spawn the search worker thread
///
/// Includes panic handling to prevent TUI corruption: a panic on a worker
/// thread is logged and reported to the main thread as an error with
/// request_id 0. Panics on any other thread go to the previously installed hook.
///
/// # Arguments
/// * `client` - HTTP client for the search endpoint
/// * `request_rx` - Channel to receive requests
/// * `response_tx` - Channel to send responses
pub fn spawn_worker(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    install_panic_hook();

    std::thread::spawn(move || {
        PANIC_REPORTER.with(|reporter| *reporter.borrow_mut() = Some(response_tx.clone()));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {}", e);
                    return;
                }
            };

            rt.block_on(worker_loop(client, request_rx, response_tx));
        }));

        PANIC_REPORTER.with(|reporter| reporter.borrow_mut().take());

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Search worker thread panicked: {}", panic_msg);
        }
    });
}

/// Chain a hook in front of the current one, once per process
///
/// Must run after the terminal hook is installed so UI panics still restore
/// the terminal.
fn install_panic_hook() {
    INSTALL_PANIC_HOOK.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let reporter = PANIC_REPORTER
                .try_with(|reporter| reporter.try_borrow().ok().and_then(|tx| tx.clone()))
                .ok()
                .flatten();

            let Some(response_tx) = reporter else {
                prev_hook(panic_info);
                return;
            };

            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in search worker".to_string()
            };

            log::error!(
                "Search worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            let _ = response_tx.send(SearchResponse::Error {
                message: format!("Search worker crashed: {}", panic_msg),
                query: String::new(),
                request_id: 0,
                kind: RequestKind::Live,
            });
        }));
    });
}

/// Main worker loop - processes requests until the channel closes
async fn worker_loop(
    client: SearchClient,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    log::debug!("Search worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received {:?} request {}: {}",
            request.kind,
            request.request_id,
            request.query
        );
        let response = handle_request(&client, request).await;
        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("Search worker thread shutting down");
}

/// Handle a single search request
async fn handle_request(client: &SearchClient, request: SearchRequest) -> SearchResponse {
    let SearchRequest {
        query,
        request_id,
        kind,
        cancel_token,
    } = request;

    match client.search_with_cancel(&query, &cancel_token).await {
        Ok(results) => {
            log::debug!("Request {} returned {} results", request_id, results.len());
            SearchResponse::Success {
                results,
                query,
                request_id,
                kind,
            }
        }
        Err(SearchError::Cancelled) => {
            log::debug!("Request {} was cancelled", request_id);
            SearchResponse::Cancelled { request_id, kind }
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request_id, e);
            SearchResponse::Error {
                message: e.to_string(),
                query,
                request_id,
                kind,
            }
        }
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;

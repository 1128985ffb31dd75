//! Search Worker Module
//!
//! Runs search requests on a background thread so the UI never blocks on the
//! network. Receives requests via channel, fetches with cancellation support,
//! and sends responses back to the main thread.
//!
//! ## Architecture
//!
//! - Single background thread with std::sync::mpsc channels
//! - Blocking recv() in dedicated thread, single-threaded tokio runtime for HTTP
//! - Panic hook to prevent TUI corruption
//! - Request/Response pattern with request IDs and cancellation tokens

pub mod thread;
pub mod types;

pub use thread::spawn_worker;
pub use types::{RequestKind, SearchRequest, SearchResponse};

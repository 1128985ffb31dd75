//! Live ticker search
//!
//! Typing schedules a debounced request, a background worker fetches the
//! results over HTTP, and `SearchState` applies only the response that matches
//! the current query.

pub mod client;
pub mod debouncer;
pub mod document;
pub mod search_state;
pub mod worker;

pub use client::{SearchClient, SearchError};
pub use debouncer::Debouncer;
pub use document::{Document, SearchResults};
pub use search_state::{SearchEvent, SearchState};

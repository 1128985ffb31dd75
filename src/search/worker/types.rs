//! Search Worker Types
//!
//! Type definitions for the search worker thread communication.

use tokio_util::sync::CancellationToken;

use crate::search::document::SearchResults;

/// Why a request was issued, echoed back on the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Debounced request triggered by typing
    Live,
    /// Request triggered by submitting the input field
    Submit,
}

/// Request to search for a query
#[derive(Debug)]
pub struct SearchRequest {
    pub query: String,
    /// Unique ID for tracking this request (0 is reserved for worker errors)
    pub request_id: u64,
    pub kind: RequestKind,
    pub cancel_token: CancellationToken,
}

/// Response from the search worker
#[derive(Debug)]
pub enum SearchResponse {
    Success {
        results: Vec<SearchResults>,
        /// The query that produced these results
        query: String,
        request_id: u64,
        kind: RequestKind,
    },
    Error {
        message: String,
        query: String,
        /// request_id = 0 indicates a worker-level error
        request_id: u64,
        kind: RequestKind,
    },
    Cancelled {
        request_id: u64,
        kind: RequestKind,
    },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Success { request_id, .. }
            | SearchResponse::Error { request_id, .. }
            | SearchResponse::Cancelled { request_id, .. } => *request_id,
        }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            SearchResponse::Success { kind, .. }
            | SearchResponse::Error { kind, .. }
            | SearchResponse::Cancelled { kind, .. } => *kind,
        }
    }
}

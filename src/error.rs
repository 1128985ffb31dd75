use thiserror::Error;

#[derive(Debug, Error)]
pub enum TickrError {
    #[error("Invalid search endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Configuration type definitions

use serde::Deserialize;

/// Search endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://revesta.net/api/search";

/// Delay between the last keystroke and the live search request
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Upper bound on a single search request
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Search configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: default_endpoint(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Apply command-line overrides on top of the file configuration
    pub fn with_overrides(mut self, endpoint: Option<String>, debounce_ms: Option<u64>) -> Self {
        if let Some(endpoint) = endpoint {
            self.search.endpoint = endpoint;
        }
        if let Some(debounce_ms) = debounce_ms {
            self.search.debounce_ms = debounce_ms;
        }
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

//! tickr library - Interactive stock ticker search
//!
//! This library exposes the core functionality of tickr for testing purposes.

pub mod alert;
pub mod app;
pub mod config;
pub mod detail;
pub mod error;
pub mod flag;
pub mod help;
pub mod input;
pub mod navigation;
pub mod notification;
pub mod results;
pub mod search;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;

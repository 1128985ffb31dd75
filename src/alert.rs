//! Blocking alert modal
//!
//! While an alert is visible it captures every key until dismissed.

mod alert_render;
mod alert_state;

pub use alert_render::render_popup;
pub use alert_state::AlertState;

/// Shown when a submitted search comes back empty
pub const NO_RESULTS_MESSAGE: &str = "No results were found for search.";

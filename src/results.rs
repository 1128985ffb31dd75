pub mod results_render;
mod results_state;

pub use results_state::ResultsListState;

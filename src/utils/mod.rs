//! Utility modules for the menu board GUI.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_panel_count, format_saved_ago};

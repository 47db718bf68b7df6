//! Text formatting helpers for the status bar.

use std::time::{Duration, Instant};

/// Describes how long ago the board was saved.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_saved_ago(None, Instant::now()), "Not saved yet");
/// ```
pub fn format_saved_ago(last_saved: Option<Instant>, now: Instant) -> String {
    let Some(saved) = last_saved else {
        return "Not saved yet".to_string();
    };
    let elapsed = now.saturating_duration_since(saved);
    if elapsed < Duration::from_secs(2) {
        "Saved just now".to_string()
    } else if elapsed < Duration::from_secs(60) {
        format!("Saved {}s ago", elapsed.as_secs())
    } else if elapsed < Duration::from_secs(3600) {
        format!("Saved {}m ago", elapsed.as_secs() / 60)
    } else {
        format!("Saved {}h ago", elapsed.as_secs() / 3600)
    }
}

/// "1 panel", "3 panels"
pub fn format_panel_count(count: usize) -> String {
    if count == 1 {
        "1 panel".to_string()
    } else {
        format!("{} panels", count)
    }
}

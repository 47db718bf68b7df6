//! Centralized application state for the menu board.
//!
//! The menu itself is owned by [`MenuStateStore`]; everything else here is
//! UI state split into focused components, each with private fields and
//! intent-revealing methods.

use crate::state::{EditState, LayoutState, NotificationState, ThemeState};
use menuboard::MenuStateStore;
use std::time::Instant;

/// Main application state.
pub struct AppState {
    /// The live menu board
    pub store: MenuStateStore,

    /// Edit mode, delete confirmation, fullscreen
    pub edit: EditState,

    /// On-screen toast
    pub notifications: NotificationState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Board sizing
    pub layout: LayoutState,

    /// When the board was last written to storage
    pub last_saved: Option<Instant>,

    /// Set by mutations; cleared when the board is persisted
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates application state with the default board and preferences.
    pub fn new() -> Self {
        Self::with_theme_and_layout(ThemeState::new().current_theme_name().to_string(), LayoutState::new())
    }

    /// Creates application state with preferences loaded from storage.
    pub fn with_theme_and_layout(theme_name: String, layout: LayoutState) -> Self {
        Self {
            store: MenuStateStore::new(),
            edit: EditState::new(),
            notifications: NotificationState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout,
            last_saved: None,
            dirty: false,
        }
    }

    // ===== Persistence bookkeeping =====

    /// Records that the board changed and must be persisted.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Records a completed save.
    pub fn mark_saved(&mut self, at: Instant) {
        self.dirty = false;
        self.last_saved = Some(at);
    }
}

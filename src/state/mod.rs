//! State management modules for the menu board GUI.
//!
//! This module contains state-only logic (no UI concerns):
//! - Edit state (edit mode, pending delete confirmation, fullscreen)
//! - Notification state (the single on-screen toast)
//! - Theme state (theme manager, current theme)
//! - Layout state (text scale, card height)
//!
//! The menu itself lives in [`menuboard::MenuStateStore`].

mod edit_state;
mod notification;
mod theme_state;
mod layout_state;

pub use edit_state::EditState;
pub use notification::{NotificationKind, NotificationState, NOTIFICATION_LIFETIME};
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;

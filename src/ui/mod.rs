//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the menu board:
//! - Header panel (edit/add/export/import/fullscreen controls, theme selector)
//! - Board panel (restaurant banner, featured panel, two panel columns)
//! - Panel card (a single menu item, inline editable)
//! - Confirm dialog (delete confirmation)
//! - Notification toast
//! - Status bar (edit mode, panel count, last save)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod board_panel;
pub mod panel_card;
pub mod confirm_dialog;
pub mod notification_toast;
pub mod status_bar;
pub mod panel_manager;

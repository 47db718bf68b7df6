//! Application-level coordination and workflow management.
//!
//! Every UI control lands here and calls exactly one store operation, then
//! reports the outcome through a notification. Mutations mark the state
//! dirty; the update loop persists dirty state in the same frame.

use crate::app::AppState;
use crate::io::{write_export, AsyncLoader, LoadResult};
use menuboard::{MenuError, PanelColor, PanelField, PanelId, PanelMove};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Header text field edited inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    RestaurantName,
    Subtitle,
}

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Shows the startup greeting.
    pub fn welcome(state: &mut AppState) {
        state
            .notifications
            .info("Welcome! Use controls to customize your menu board");
    }

    pub fn toggle_edit_mode(state: &mut AppState) {
        if state.edit.toggle_edit_mode() {
            state
                .notifications
                .success("Edit mode enabled - Click on any text to edit");
        } else {
            state.notifications.info("Edit mode disabled");
        }
    }

    // ===== Panel lifecycle =====

    pub fn add_panel<R: Rng + ?Sized>(state: &mut AppState, rng: &mut R) -> PanelId {
        let id = state.store.add_panel(rng);
        state.mark_dirty();
        state.notifications.success("New panel added");
        id
    }

    /// Asks the operator to confirm deleting `id`.
    pub fn request_delete(state: &mut AppState, id: PanelId) {
        if id == state.store.featured().id() {
            log::warn!("{}", MenuError::FeaturedPanelProtected);
            state.notifications.warning("The featured panel cannot be deleted");
            return;
        }
        state.edit.request_delete(id);
    }

    /// Deletes the panel awaiting confirmation.
    pub fn confirm_delete(state: &mut AppState) {
        let Some(id) = state.edit.take_pending_delete() else {
            return;
        };
        match state.store.delete_panel(id) {
            Ok(panel) => {
                log::info!("Deleted panel {} ({})", id, panel.title);
                state.mark_dirty();
                state.notifications.info("Panel deleted");
            }
            Err(e) => Self::report_rejection(state, e),
        }
    }

    pub fn cancel_delete(state: &mut AppState) {
        state.edit.cancel_delete();
    }

    pub fn move_panel(state: &mut AppState, id: PanelId, step: PanelMove) {
        match state.store.move_panel(id, step) {
            Ok(()) => state.mark_dirty(),
            Err(e) => Self::report_rejection(state, e),
        }
    }

    // ===== Inline edits =====

    pub fn edit_header(state: &mut AppState, field: HeaderField, value: String) {
        match field {
            HeaderField::RestaurantName => state.store.set_restaurant_name(value),
            HeaderField::Subtitle => state.store.set_subtitle(value),
        }
        state.mark_dirty();
    }

    pub fn edit_panel(state: &mut AppState, id: PanelId, field: PanelField, value: String) {
        match state.store.edit_panel(id, field, value) {
            Ok(()) => state.mark_dirty(),
            Err(e) => Self::report_rejection(state, e),
        }
    }

    pub fn set_panel_color(state: &mut AppState, id: PanelId, color: PanelColor) {
        match state.store.set_panel_color(id, color) {
            Ok(()) => state.mark_dirty(),
            Err(e) => Self::report_rejection(state, e),
        }
    }

    // ===== Export / import =====

    /// Writes the exported board to `path`.
    pub fn export_menu(state: &mut AppState, path: &Path) {
        let result = state
            .store
            .export_document()
            .map_err(anyhow::Error::from)
            .and_then(|text| write_export(path, &text));

        match result {
            Ok(()) => {
                log::info!("Exported menu to {}", path.display());
                state.notifications.success("Menu exported successfully");
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                state.notifications.error("Error exporting menu");
            }
        }
    }

    /// Starts reading an import file in the background.
    pub fn start_import(loader: &mut AsyncLoader, path: PathBuf, ctx: &egui::Context) {
        log::info!("Importing menu from {}", path.display());
        loader.start_file_load(path, ctx);
    }

    /// Applies a finished import read, if one is waiting.
    ///
    /// Called once per frame. Returns true if an import completed.
    pub fn check_import_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { text, path } => {
                Self::import_text(state, &text, Some(&path));
                true
            }
            LoadResult::Error(error_msg) => {
                log::error!("Import failed: {}", error_msg);
                state
                    .notifications
                    .error("Error importing menu: Invalid file format");
                true
            }
            LoadResult::None => false,
        }
    }

    /// Parses and applies document text; the board is untouched on failure.
    pub fn import_text(state: &mut AppState, text: &str, source: Option<&Path>) {
        match state.store.import_document(text) {
            Ok(()) => {
                if let Some(path) = source {
                    log::info!("Imported {} panels from {}", state.store.panel_count(), path.display());
                }
                state.mark_dirty();
                state.notifications.success("Menu imported successfully");
            }
            Err(e) => {
                log::warn!("Rejected import: {}", e);
                state
                    .notifications
                    .error("Error importing menu: Invalid file format");
            }
        }
    }

    // ===== Display =====

    pub fn toggle_fullscreen(state: &mut AppState, ctx: &egui::Context) {
        let fullscreen = state.edit.toggle_fullscreen();
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
        if fullscreen {
            state
                .notifications
                .success("Fullscreen mode enabled - Perfect for TV display!");
        } else {
            state.notifications.info("Fullscreen mode disabled");
        }
    }

    // ===== Persistence =====

    /// Persists the board if anything changed since the last save.
    pub fn persist_if_dirty(state: &mut AppState, storage: Option<&mut (dyn eframe::Storage + '_)>, now: Instant) {
        if state.is_dirty() {
            Self::persist(state, storage, now);
        }
    }

    /// Persists the board unconditionally.
    pub fn persist(state: &mut AppState, storage: Option<&mut (dyn eframe::Storage + '_)>, now: Instant) {
        match state.store.try_persist(storage) {
            Ok(()) => state.mark_saved(now),
            Err(e) => log::warn!("Could not save menu board: {}", e),
        }
    }

    fn report_rejection(state: &mut AppState, error: MenuError) {
        log::warn!("{}", error);
        state.notifications.warning(error.to_string());
    }
}

//! Menu Board GUI Application
//!
//! An editable digital menu board built on egui, meant to run fullscreen on a
//! TV or kiosk display. The operator can:
//! - Edit the restaurant name, subtitle and every panel inline
//! - Add, delete, recolor and reorder panels across two columns

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Export the board to JSON and import it back
//! - Keep the board across restarts (saved on every edit and every 30 s)
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Edit, notification, theme and layout state
//! - `presentation/` - Mapping panel categories to theme colors
//! - `io/` - Background import reads and export writes
//! - `utils/` - Formatting helpers
//! - `ui/` - Header, board, cards, dialogs, toast and status bar
//!
//! The menu model and its synchronization logic live in the `menuboard` library.

use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod utils;
mod presentation;
mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::AsyncLoader;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// How often eframe calls `save` while the board is open
const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(30);

/// Main application entry point that initializes and launches the menu board GUI.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("menuboard=info,menuboard_gui=info"))
        .init();

    // Optional menu file to import on the first frame
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Menu Board"),
        ..Default::default()
    };

    eframe::run_native(
        "Menu Board",
        options,
        Box::new(move |cc| Ok(Box::new(MenuBoardApp::new(cc, initial_file)))),
    )
}

/// The menu board application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles every board operation and its notifications
/// - `ThemeCoordinator` and `SettingsCoordinator` handle preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct MenuBoardApp {
    /// Centralized application state
    state: AppState,
    /// Background reader for import files
    loader: AsyncLoader,
    /// Optional file to import on first frame
    pending_file_load: Option<PathBuf>,
}

impl MenuBoardApp {
    /// Creates the application with preferences and the saved board restored from storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout = SettingsCoordinator::load_layout(cc.storage);

        let mut state = AppState::with_theme_and_layout(theme_name, layout);
        state.store.restore(cc.storage);
        ApplicationCoordinator::welcome(&mut state);

        Self {
            state,
            loader: AsyncLoader::new(),
            pending_file_load: initial_file,
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: PanelInteraction,
        ctx: &egui::Context,
        frame: &mut eframe::Frame,
    ) {
        let state = &mut self.state;
        match interaction {
            PanelInteraction::ToggleEditMode => ApplicationCoordinator::toggle_edit_mode(state),
            PanelInteraction::AddPanel => {
                ApplicationCoordinator::add_panel(state, &mut rand::thread_rng());
            }
            PanelInteraction::ExportRequested(path) => ApplicationCoordinator::export_menu(state, &path),
            PanelInteraction::ImportRequested(path) => {
                ApplicationCoordinator::start_import(&mut self.loader, path, ctx);
            }
            PanelInteraction::ToggleFullscreen => ApplicationCoordinator::toggle_fullscreen(state, ctx),
            PanelInteraction::PreferencesChanged => {
                if let Some(storage) = frame.storage_mut() {
                    ThemeCoordinator::save_theme_to_storage(storage, state.theme.current_theme_name());
                    SettingsCoordinator::save_layout(storage, &state.layout);
                }
            }
            PanelInteraction::HeaderEdited { field, value } => {
                ApplicationCoordinator::edit_header(state, field, value);
            }
            PanelInteraction::PanelEdited { id, field, value } => {
                ApplicationCoordinator::edit_panel(state, id, field, value);
            }
            PanelInteraction::PanelColorChanged { id, color } => {
                ApplicationCoordinator::set_panel_color(state, id, color);
            }
            PanelInteraction::PanelMoved { id, step } => {
                ApplicationCoordinator::move_panel(state, id, step);
            }
            PanelInteraction::DeleteRequested(id) => ApplicationCoordinator::request_delete(state, id),
            PanelInteraction::DeleteConfirmed => ApplicationCoordinator::confirm_delete(state),
            PanelInteraction::DeleteCancelled => ApplicationCoordinator::cancel_delete(state),
        }
    }
}

impl eframe::App for MenuBoardApp {
    /// Called on the autosave interval and at shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ApplicationCoordinator::persist(&mut self.state, Some(&mut *storage), Instant::now());
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_layout(storage, &self.state.layout);
    }

    fn auto_save_interval(&self) -> Duration {
        AUTOSAVE_INTERVAL
    }

    /// Main update loop.
    ///
    /// 1. Apply a finished import, or start the command-line import
    /// 2. Expire the toast and apply the theme
    /// 3. Render all panels and handle the interaction
    /// 4. Persist the board if anything changed this frame
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        ApplicationCoordinator::check_import_completion(&mut self.state, &mut self.loader);

        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::start_import(&mut self.loader, path, ctx);
        }

        if let Some(fullscreen) = ctx.input(|i| i.viewport().fullscreen) {
            self.state.edit.sync_fullscreen(fullscreen);
        }

        self.state.notifications.expire(now);
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let importing = self.loader.is_loading();
        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, importing, now) {
            self.handle_panel_interaction(interaction, ctx, frame);
        }

        ApplicationCoordinator::persist_if_dirty(&mut self.state, frame.storage_mut(), now);

        // Keeps the "saved Ns ago" label current
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

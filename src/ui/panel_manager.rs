//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar and board, draws overlays (delete
//! confirmation, toast), and funnels every interaction into one
//! [`PanelInteraction`] for the application to handle.

use crate::app::HeaderField;
use crate::app::AppState;
use crate::ui::board_panel::{self, BoardInteraction};
use crate::ui::confirm_dialog::{self, ConfirmResult};
use crate::ui::header::{self, HeaderInteraction};
use crate::ui::panel_card::CardInteraction;
use crate::ui::{notification_toast, status_bar};
use menuboard::{PanelColor, PanelField, PanelId, PanelMove};
use std::path::PathBuf;
use std::time::Instant;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    ToggleEditMode,
    AddPanel,
    ExportRequested(PathBuf),
    ImportRequested(PathBuf),
    ToggleFullscreen,
    PreferencesChanged,
    HeaderEdited { field: HeaderField, value: String },
    PanelEdited { id: PanelId, field: PanelField, value: String },
    PanelColorChanged { id: PanelId, color: PanelColor },
    PanelMoved { id: PanelId, step: PanelMove },
    DeleteRequested(PanelId),
    DeleteConfirmed,
    DeleteCancelled,
}

impl From<HeaderInteraction> for PanelInteraction {
    fn from(interaction: HeaderInteraction) -> Self {
        match interaction {
            HeaderInteraction::ToggleEditMode => PanelInteraction::ToggleEditMode,
            HeaderInteraction::AddPanel => PanelInteraction::AddPanel,
            HeaderInteraction::ExportRequested(path) => PanelInteraction::ExportRequested(path),
            HeaderInteraction::ImportRequested(path) => PanelInteraction::ImportRequested(path),
            HeaderInteraction::ToggleFullscreen => PanelInteraction::ToggleFullscreen,
            HeaderInteraction::PreferencesChanged => PanelInteraction::PreferencesChanged,
        }
    }
}

impl From<BoardInteraction> for PanelInteraction {
    fn from(interaction: BoardInteraction) -> Self {
        match interaction {
            BoardInteraction::HeaderEdited { field, value } => PanelInteraction::HeaderEdited { field, value },
            BoardInteraction::Panel { id, interaction } => match interaction {
                CardInteraction::Edited { field, value } => PanelInteraction::PanelEdited { id, field, value },
                CardInteraction::ColorChanged(color) => PanelInteraction::PanelColorChanged { id, color },
                CardInteraction::Moved(step) => PanelInteraction::PanelMoved { id, step },
                CardInteraction::DeleteRequested => PanelInteraction::DeleteRequested(id),
            },
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        importing: bool,
        now: Instant,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state.theme.current_theme().colors.clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(header_interaction.into());
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, &theme_colors, importing, now);
        });

        let board_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(16))
            .fill(theme_colors.background);

        egui::CentralPanel::default()
            .frame(board_frame)
            .show(ctx, |ui| {
                if let Some(board_interaction) = board_panel::render_board(ui, state, &theme_colors) {
                    interaction = Some(board_interaction.into());
                }
            });

        if let Some(panel) = state.edit.pending_delete().and_then(|id| state.store.panel(id)) {
            match confirm_dialog::render_delete_confirmation(ctx, panel) {
                Some(ConfirmResult::Confirmed) => interaction = Some(PanelInteraction::DeleteConfirmed),
                Some(ConfirmResult::Cancelled) => interaction = Some(PanelInteraction::DeleteCancelled),
                None => {}
            }
        }

        notification_toast::render_notification(ctx, &state.notifications, &theme_colors, now);

        interaction
    }
}

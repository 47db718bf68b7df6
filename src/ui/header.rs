//! Header panel UI rendering
//!
//! Handles the top control bar: edit toggle, add panel, export/import,
//! fullscreen, text size, panel height and theme selector.

use crate::app::AppState;
use eframe::egui;
use menuboard::EXPORT_FILE_NAME;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    ToggleEditMode,
    AddPanel,
    /// User picked a destination for the export
    ExportRequested(PathBuf),
    /// User picked a file to import
    ImportRequested(PathBuf),
    ToggleFullscreen,
    /// Theme or text size changed and should be saved
    PreferencesChanged,
}

/// Renders the control bar.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let edit_label = if state.edit.is_editing() {
            "✔ Done Editing"
        } else {
            "✏ Edit Menu"
        };
        if ui.button(edit_label).clicked() {
            interaction = Some(HeaderInteraction::ToggleEditMode);
        }

        if ui.button("➕ Add Panel").clicked() {
            interaction = Some(HeaderInteraction::AddPanel);
        }

        ui.separator();

        if ui.button("💾 Export").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Menu Board", &["json"])
                .set_file_name(EXPORT_FILE_NAME);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.save_file() {
                interaction = Some(HeaderInteraction::ExportRequested(path));
            }
        }

        if ui.button("📁 Import").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Menu Board", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::ImportRequested(path));
            }
        }

        ui.separator();

        let fullscreen_label = if state.edit.is_fullscreen() {
            "🗗 Exit Fullscreen"
        } else {
            "⛶ Fullscreen"
        };
        if ui.button(fullscreen_label).clicked() {
            interaction = Some(HeaderInteraction::ToggleFullscreen);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    let manager = state.theme.theme_manager();
                    for theme_name in manager.list_themes() {
                        let response =
                            ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                        if let Some(theme) = manager.get_theme(theme_name) {
                            response.on_hover_text(theme.description.as_str());
                        }
                    }
                });

            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                interaction = Some(HeaderInteraction::PreferencesChanged);
            }

            ui.label("Theme:");
            ui.separator();

            if ui.button("A+").on_hover_text("Larger text").clicked() {
                state.layout.grow_text();
                interaction = Some(HeaderInteraction::PreferencesChanged);
            }
            if ui.button("A-").on_hover_text("Smaller text").clicked() {
                state.layout.shrink_text();
                interaction = Some(HeaderInteraction::PreferencesChanged);
            }
            ui.separator();

            if ui.button("▯+").on_hover_text("Taller panels").clicked() {
                state.layout.grow_cards();
                interaction = Some(HeaderInteraction::PreferencesChanged);
            }
            if ui.button("▯-").on_hover_text("Shorter panels").clicked() {
                state.layout.shrink_cards();
                interaction = Some(HeaderInteraction::PreferencesChanged);
            }
        });
    });

    interaction
}

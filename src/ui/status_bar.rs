//! Status bar UI rendering
//!
//! Shows edit mode, panel count, import progress and when the board was
//! last saved.

use crate::app::AppState;
use crate::utils::{format_panel_count, format_saved_ago};
use eframe::egui;
use egui::RichText;
use menuboard::ThemeColors;
use std::time::Instant;

pub fn render_status_bar(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
    importing: bool,
    now: Instant,
) {
    ui.horizontal(|ui| {
        if state.edit.is_editing() {
            ui.label(RichText::new("EDITING").strong().color(theme_colors.warning));
        } else {
            ui.label(RichText::new("DISPLAY").strong().color(theme_colors.text_dim));
        }
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format_panel_count(state.store.panel_count())).strong());
        ui.label(RichText::new("|").strong());

        let saved = format_saved_ago(state.last_saved, now);
        if state.is_dirty() {
            ui.label(RichText::new(format!("{} (unsaved changes)", saved)).color(theme_colors.warning));
        } else {
            ui.label(saved);
        }

        if importing {
            ui.label(RichText::new("|").strong());
            ui.spinner();
            ui.label(RichText::new("Importing menu...").color(theme_colors.info));
        }
    });
}

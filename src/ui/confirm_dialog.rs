//! Delete confirmation dialog

use eframe::egui;
use egui::RichText;
use menuboard::Panel;

/// Operator's answer to the confirmation
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
}

/// Shows the delete confirmation for `panel` while one is pending.
pub fn render_delete_confirmation(ctx: &egui::Context, panel: &Panel) -> Option<ConfirmResult> {
    let mut result = None;

    egui::Window::new("Delete panel")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Are you sure you want to delete this panel?");
            ui.label(RichText::new(format!("{} {}", panel.emoji, panel.title)).strong());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    result = Some(ConfirmResult::Confirmed);
                }
                if ui.button("Cancel").clicked() {
                    result = Some(ConfirmResult::Cancelled);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        result = Some(ConfirmResult::Cancelled);
    }

    result
}

//! Board panel UI rendering
//!
//! Projects the menu model onto the screen: restaurant banner, the featured
//! panel, then the left and right columns side by side.

use crate::app::HeaderField;
use crate::app::AppState;
use crate::ui::panel_card::{self, CardInteraction, CardPlacement};
use eframe::egui;
use egui::{FontId, RichText, ScrollArea};
use menuboard::{Column, Panel, PanelId, ThemeColors};

const NAME_SIZE: f32 = 42.0;
const SUBTITLE_SIZE: f32 = 18.0;

/// Result of user interaction with the board
pub enum BoardInteraction {
    HeaderEdited { field: HeaderField, value: String },
    Panel { id: PanelId, interaction: CardInteraction },
}

/// Renders the whole board.
pub fn render_board(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
) -> Option<BoardInteraction> {
    let mut interaction = None;
    let editing = state.edit.is_editing();

    if let Some(banner) = render_banner(ui, state, theme_colors, editing) {
        interaction = Some(banner);
    }

    ui.add_space(12.0);

    ScrollArea::vertical()
        .id_salt("board_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let featured = state.store.featured();
            let placement = CardPlacement {
                is_first: true,
                is_last: true,
            };
            if let Some(card) =
                panel_card::render_panel_card(ui, featured, theme_colors, &state.layout, editing, placement)
            {
                interaction = Some(BoardInteraction::Panel {
                    id: featured.id(),
                    interaction: card,
                });
            }

            ui.add_space(12.0);

            ui.columns(2, |columns| {
                for (ui, column) in columns.iter_mut().zip([Column::Left, Column::Right]) {
                    if let Some(hit) = render_column(ui, state.store.column(column), state, theme_colors, editing) {
                        interaction = Some(hit);
                    }
                }
            });

            if state.store.panel_count() == 0 && editing {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No menu items yet. Use ➕ Add Panel to create one.").color(theme_colors.text_dim));
                });
            }
        });

    interaction
}

fn render_banner(
    ui: &mut egui::Ui,
    state: &AppState,
    theme_colors: &ThemeColors,
    editing: bool,
) -> Option<BoardInteraction> {
    let mut interaction = None;

    egui::Frame::default()
        .fill(theme_colors.header_background)
        .stroke(egui::Stroke::new(2.0, theme_colors.border))
        .corner_radius(6.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                let fields = [
                    (HeaderField::RestaurantName, state.store.restaurant_name(), NAME_SIZE, theme_colors.text_strong),
                    (HeaderField::Subtitle, state.store.subtitle(), SUBTITLE_SIZE, theme_colors.price),
                ];
                for (field, text, size, color) in fields {
                    let size = state.layout.font_size(size);
                    if editing {
                        let mut buffer = text.to_string();
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut buffer)
                                .id_salt(("header_field", field as u8))
                                .font(FontId::proportional(size))
                                .text_color(color)
                                .horizontal_align(egui::Align::Center)
                                .desired_width(f32::INFINITY),
                        );
                        if response.changed() {
                            interaction = Some(BoardInteraction::HeaderEdited { field, value: buffer });
                        }
                    } else {
                        ui.label(RichText::new(text).size(size).strong().color(color));
                    }
                }
            });
        });

    interaction
}

fn render_column(
    ui: &mut egui::Ui,
    panels: &[Panel],
    state: &AppState,
    theme_colors: &ThemeColors,
    editing: bool,
) -> Option<BoardInteraction> {
    let mut interaction = None;

    for (row, panel) in panels.iter().enumerate() {
        let placement = CardPlacement {
            is_first: row == 0,
            is_last: row + 1 == panels.len(),
        };
        if let Some(card) =
            panel_card::render_panel_card(ui, panel, theme_colors, &state.layout, editing, placement)
        {
            interaction = Some(BoardInteraction::Panel {
                id: panel.id(),
                interaction: card,
            });
        }
        ui.add_space(8.0);
    }

    interaction
}

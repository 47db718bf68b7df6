//! Panel card UI rendering
//!
//! Draws a single menu panel. In edit mode the title, price and emoji become
//! text fields and ordinary panels gain color, move and delete controls.

use crate::presentation::color_mapping::{self, CardColors};
use crate::state::LayoutState;
use eframe::egui;
use egui::{Color32, FontId, RichText};
use menuboard::{Panel, PanelColor, PanelField, PanelMove, ThemeColors};

const EMOJI_SIZE: f32 = 40.0;
const TITLE_SIZE: f32 = 20.0;
const PRICE_SIZE: f32 = 18.0;
const FEATURED_SCALE: f32 = 1.5;

/// Result of user interaction with one card
pub enum CardInteraction {
    Edited { field: PanelField, value: String },
    ColorChanged(PanelColor),
    Moved(PanelMove),
    DeleteRequested,
}

/// Where the card sits in its column, for enabling move buttons
#[derive(Debug, Clone, Copy)]
pub struct CardPlacement {
    pub is_first: bool,
    pub is_last: bool,
}

/// Renders one panel card.
pub fn render_panel_card(
    ui: &mut egui::Ui,
    panel: &Panel,
    theme_colors: &ThemeColors,
    layout: &LayoutState,
    editing: bool,
    placement: CardPlacement,
) -> Option<CardInteraction> {
    let card = color_mapping::card_colors(panel, theme_colors);
    let scale = if panel.is_featured() { FEATURED_SCALE } else { 1.0 };
    let mut interaction = None;

    egui::Frame::default()
        .fill(card.fill)
        .stroke(egui::Stroke::new(2.0, card.stroke))
        .corner_radius(8.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(layout.card_height() * scale);

            ui.horizontal(|ui| {
                let emoji_size = layout.font_size(EMOJI_SIZE * scale);
                if let Some(value) =
                    editable_text(ui, panel, PanelField::Emoji, emoji_size, card.text, editing, 56.0 * scale)
                {
                    interaction = Some(CardInteraction::Edited { field: PanelField::Emoji, value });
                }

                ui.vertical(|ui| {
                    if panel.is_featured() && !editing {
                        ui.label(
                            RichText::new("★ FEATURED")
                                .size(layout.font_size(12.0))
                                .color(card.price),
                        );
                    }
                    for (field, size, color) in [
                        (PanelField::Title, TITLE_SIZE, card.text),
                        (PanelField::Price, PRICE_SIZE, card.price),
                    ] {
                        let size = layout.font_size(size * scale);
                        // Featured title is fixed
                        let editable = editing && !(panel.is_featured() && field == PanelField::Title);
                        if let Some(value) =
                            editable_text(ui, panel, field, size, color, editable, f32::INFINITY)
                        {
                            interaction = Some(CardInteraction::Edited { field, value });
                        }
                    }
                });
            });

            if editing && !panel.is_featured() {
                if let Some(controls) = render_card_controls(ui, panel, &card, placement) {
                    interaction = Some(controls);
                }
            }
        });

    interaction
}

/// Label in view mode, text field in edit mode. Returns the new text when edited.
fn editable_text(
    ui: &mut egui::Ui,
    panel: &Panel,
    field: PanelField,
    size: f32,
    color: Color32,
    editing: bool,
    width: f32,
) -> Option<String> {
    let text = match field {
        PanelField::Title => &panel.title,
        PanelField::Price => &panel.price,
        PanelField::Emoji => &panel.emoji,
    };

    if !editing {
        let rich = RichText::new(text.as_str()).size(size).color(color);
        ui.label(if field == PanelField::Title { rich.strong() } else { rich });
        return None;
    }

    let mut buffer = text.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .id_salt(("panel_field", panel.id().0, field as u8))
            .font(FontId::proportional(size))
            .text_color(color)
            .frame(true)
            .desired_width(width),
    );
    response.changed().then_some(buffer)
}

fn render_card_controls(
    ui: &mut egui::Ui,
    panel: &Panel,
    card: &CardColors,
    placement: CardPlacement,
) -> Option<CardInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let mut color = panel.color;
        egui::ComboBox::from_id_salt(("panel_color", panel.id().0))
            .selected_text(RichText::new(color.label()).color(card.text))
            .show_ui(ui, |ui| {
                for option in PanelColor::ALL {
                    ui.selectable_value(&mut color, option, option.label());
                }
            });
        if color != panel.color {
            interaction = Some(CardInteraction::ColorChanged(color));
        }

        if ui
            .add_enabled(!placement.is_first, egui::Button::new("▲"))
            .on_hover_text("Move up")
            .clicked()
        {
            interaction = Some(CardInteraction::Moved(PanelMove::Up));
        }
        if ui
            .add_enabled(!placement.is_last, egui::Button::new("▼"))
            .on_hover_text("Move down")
            .clicked()
        {
            interaction = Some(CardInteraction::Moved(PanelMove::Down));
        }
        if ui.button("⇄").on_hover_text("Move to other column").clicked() {
            interaction = Some(CardInteraction::Moved(PanelMove::Across));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("×").on_hover_text("Delete panel").clicked() {
                interaction = Some(CardInteraction::DeleteRequested);
            }
        });
    });

    interaction
}

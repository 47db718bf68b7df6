//! Notification toast rendering
//!
//! Draws the current notification in the top-right corner and fades it out
//! over the last part of its lifetime.

use crate::presentation::color_mapping;
use crate::state::{NotificationState, NOTIFICATION_LIFETIME};
use eframe::egui;
use egui::{Color32, RichText};
use menuboard::{with_alpha, ThemeColors};
use std::time::Instant;

/// Portion of the lifetime spent fading out
const FADE_FRACTION: f32 = 0.1;

pub fn render_notification(
    ctx: &egui::Context,
    notifications: &NotificationState,
    theme_colors: &ThemeColors,
    now: Instant,
) {
    let Some(notification) = notifications.current() else {
        return;
    };

    let progress = notification.progress(now);
    let alpha = if progress > 1.0 - FADE_FRACTION {
        ((1.0 - progress) / FADE_FRACTION * 255.0) as u8
    } else {
        255
    };
    let fill = with_alpha(color_mapping::notification_color(notification.kind, theme_colors), alpha);

    egui::Area::new(egui::Id::new("notification_toast"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(fill)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(&notification.message)
                            .strong()
                            .size(16.0)
                            .color(with_alpha(Color32::WHITE, alpha)),
                    );
                });
        });

    ctx.request_repaint_after(NOTIFICATION_LIFETIME.mul_f32(FADE_FRACTION / 4.0));
}

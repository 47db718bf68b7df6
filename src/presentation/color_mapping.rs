//! Color mapping for panels and notifications.

use crate::state::NotificationKind;
use egui::Color32;
use menuboard::{adjust_brightness, Panel, ThemeColors};

/// Fill and text color of a panel card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub fill: Color32,
    pub text: Color32,
    pub price: Color32,
    pub stroke: Color32,
}

/// Colors for drawing `panel` with the current theme.
///
/// The featured panel ignores its category and uses the theme's featured
/// background so it stands apart from the grid.
pub fn card_colors(panel: &Panel, colors: &ThemeColors) -> CardColors {
    if panel.is_featured() {
        CardColors {
            fill: colors.featured_background,
            text: colors.text_strong,
            price: colors.price,
            stroke: colors.price,
        }
    } else {
        let fill = colors.panel_fill(panel.color);
        CardColors {
            fill,
            text: colors.panel_text,
            price: colors.panel_text,
            stroke: adjust_brightness(fill, 0.8),
        }
    }
}

/// Background color of a notification toast.
pub fn notification_color(kind: NotificationKind, colors: &ThemeColors) -> Color32 {
    match kind {
        NotificationKind::Success => colors.success,
        NotificationKind::Error => colors.error,
        NotificationKind::Info => colors.info,
        NotificationKind::Warning => colors.warning,
    }
}

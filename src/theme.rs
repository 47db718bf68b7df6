//! Board themes.
//!
//! Each theme carries the window colors plus one fill per panel category, so
//! the same [`PanelColor`] reads well on a bright kiosk screen and on a dark
//! TV display.
//!
//! # Examples
//!
//! ```
//! use menuboard::theme::ThemeManager;
//! use menuboard::PanelColor;
//!
//! let manager = ThemeManager::new();
//! let chalkboard = manager.get_theme("Chalkboard").unwrap();
//! let fill = chalkboard.colors.panel_fill(PanelColor::Green);
//! assert_ne!(fill, chalkboard.colors.background);
//! ```

use crate::panel::PanelColor;
use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when no preference is stored
pub const DEFAULT_THEME: &str = "Classic";

/// Complete color palette for a board theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Window
    pub background: Color32,
    pub panel_background: Color32,
    pub header_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    /// Restaurant name and panel titles
    pub text_strong: Color32,
    /// Text drawn on top of panel fills
    pub panel_text: Color32,
    pub price: Color32,

    pub border: Color32,
    pub featured_background: Color32,

    // Notifications
    pub success: Color32,
    pub error: Color32,
    pub info: Color32,
    pub warning: Color32,

    /// One fill per [`PanelColor`], indexed by [`PanelColor::index`]
    pub panel_fills: [Color32; 8],
}

impl ThemeColors {
    /// Fill color for a panel category.
    pub fn panel_fill(&self, color: PanelColor) -> Color32 {
        self.panel_fills[color.index()]
    }
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes = [classic_theme(), chalkboard_theme(), daylight_theme()]
            .into_iter()
            .map(|theme| (theme.name.clone(), theme))
            .collect();

        Self {
            themes,
            fallback: classic_theme(),
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Looks up `name`, falling back to [`DEFAULT_THEME`].
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's window colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = with_alpha(colors.price, 90);
        visuals.selection.stroke.color = colors.price;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = adjust_brightness(colors.panel_background, 1.3);
        visuals.widgets.hovered.bg_fill = adjust_brightness(colors.panel_background, 1.6);
        visuals.widgets.active.bg_fill = adjust_brightness(colors.panel_background, 1.9);

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Red-and-gold fast food look
fn classic_theme() -> Theme {
    Theme {
        name: "Classic".to_string(),
        description: "Dark board with red header and gold prices".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1a1a1a"),
            panel_background: hex_to_color32("#222222"),
            header_background: hex_to_color32("#c8102e"),

            text: hex_to_color32("#f5f5f5"),
            text_dim: hex_to_color32("#9e9e9e"),
            text_strong: hex_to_color32("#ffffff"),
            panel_text: hex_to_color32("#1a1a1a"),
            price: hex_to_color32("#ffc72c"),

            border: hex_to_color32("#3a3a3a"),
            featured_background: hex_to_color32("#8b0000"),

            success: hex_to_color32("#4caf50"),
            error: hex_to_color32("#f44336"),
            info: hex_to_color32("#2196f3"),
            warning: hex_to_color32("#ff9800"),

            // green, blue, yellow, pink, beige, white, brown, gray
            panel_fills: [
                hex_to_color32("#7cb342"),
                hex_to_color32("#4fc3f7"),
                hex_to_color32("#ffd54f"),
                hex_to_color32("#f48fb1"),
                hex_to_color32("#e8d5b7"),
                hex_to_color32("#fafafa"),
                hex_to_color32("#a1887f"),
                hex_to_color32("#bdbdbd"),
            ],
        },
    }
}

/// Muted pastels on slate, readable from across a room
fn chalkboard_theme() -> Theme {
    Theme {
        name: "Chalkboard".to_string(),
        description: "Slate board with chalk pastel panels".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#263238"),
            panel_background: hex_to_color32("#2f3d44"),
            header_background: hex_to_color32("#1c262b"),

            text: hex_to_color32("#eceff1"),
            text_dim: hex_to_color32("#90a4ae"),
            text_strong: hex_to_color32("#ffffff"),
            panel_text: hex_to_color32("#263238"),
            price: hex_to_color32("#fff59d"),

            border: hex_to_color32("#455a64"),
            featured_background: hex_to_color32("#37474f"),

            success: hex_to_color32("#81c784"),
            error: hex_to_color32("#e57373"),
            info: hex_to_color32("#64b5f6"),
            warning: hex_to_color32("#ffb74d"),

            panel_fills: [
                hex_to_color32("#a5d6a7"),
                hex_to_color32("#90caf9"),
                hex_to_color32("#fff59d"),
                hex_to_color32("#f8bbd0"),
                hex_to_color32("#efebe9"),
                hex_to_color32("#ffffff"),
                hex_to_color32("#bcaaa4"),
                hex_to_color32("#cfd8dc"),
            ],
        },
    }
}

/// Bright theme for daylight kiosks
fn daylight_theme() -> Theme {
    Theme {
        name: "Daylight".to_string(),
        description: "Light background with saturated panels".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(250, 250, 250),
            panel_background: Color32::from_rgb(240, 240, 240),
            header_background: Color32::from_rgb(255, 193, 7),

            text: Color32::from_rgb(33, 33, 33),
            text_dim: Color32::from_rgb(117, 117, 117),
            text_strong: Color32::from_rgb(0, 0, 0),
            panel_text: Color32::from_rgb(33, 33, 33),
            price: Color32::from_rgb(198, 40, 40),

            border: Color32::from_rgb(189, 189, 189),
            featured_background: Color32::from_rgb(255, 236, 179),

            success: Color32::from_rgb(56, 142, 60),
            error: Color32::from_rgb(211, 47, 47),
            info: Color32::from_rgb(25, 118, 210),
            warning: Color32::from_rgb(245, 124, 0),

            panel_fills: [
                Color32::from_rgb(102, 187, 106),
                Color32::from_rgb(66, 165, 245),
                Color32::from_rgb(255, 202, 40),
                Color32::from_rgb(236, 64, 122),
                Color32::from_rgb(215, 204, 200),
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(141, 110, 99),
                Color32::from_rgb(158, 158, 158),
            ],
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Scales a color's channels (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Same color with a different alpha
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub mod error;
pub mod panel;
pub mod document;
pub mod store;
pub mod theme;

// Export model
pub use panel::{Column, Panel, PanelColor, PanelField, PanelId, PanelMove, DEFAULT_EMOJI};
pub use document::{MenuDocument, PanelEntry};

// Export store
pub use store::{MenuStateStore, EXPORT_FILE_NAME, STORAGE_KEY};
pub use error::{MenuError, MenuResult};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};

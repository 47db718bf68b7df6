//! Preference persistence.
//!
//! Board preferences (layout today) are stored in eframe's key-value storage
//! as JSON strings, next to the saved menu itself. Missing or unreadable
//! values fall back to defaults rather than failing startup.

use crate::state::LayoutState;
use serde::{Deserialize, Serialize};

const LAYOUT_KEY: &str = "board_layout";

/// Coordinates preference persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `default` if it is missing or invalid.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - Value used when loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Loads a setting, returning None if it is missing or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring unreadable setting '{}': {}", key, e);
                None
            }
        }
    }

    /// Saves a setting as JSON.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("Could not save setting '{}': {}", key, e),
        }
    }

    /// Loads the board layout, clamped to sane values.
    pub fn load_layout(storage: Option<&dyn eframe::Storage>) -> LayoutState {
        Self::load_setting_or(storage, LAYOUT_KEY, LayoutState::new()).sanitized()
    }

    pub fn save_layout(storage: &mut dyn eframe::Storage, layout: &LayoutState) {
        Self::save_setting(storage, LAYOUT_KEY, layout);
    }
}

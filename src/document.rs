//! Serializable snapshot of the menu board.
//!
//! A [`MenuDocument`] is what gets persisted, exported and imported. It is
//! built on demand from the live board and consumed right away when applied;
//! nothing holds on to one between operations.
//!
//! The JSON shape is:
//!
//! ```json
//! {
//!   "restaurantName": "OUR MENU",
//!   "subtitle": "FRESH • FAST • DELICIOUS",
//!   "panels": [
//!     { "title": "FRIES", "price": "$2.99", "emoji": "🍟",
//!       "colorClass": "yellow-panel", "isFeatured": false }
//!   ]
//! }
//! ```

use crate::error::{MenuError, MenuResult};
use crate::panel::{PanelColor, DEFAULT_EMOJI};
use serde::{Deserialize, Deserializer, Serialize};

/// Menu snapshot. Header fields are optional so a document can carry a
/// partial update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub panels: Vec<PanelEntry>,
}

/// One panel inside a [`MenuDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default = "default_emoji", deserialize_with = "emoji_or_default")]
    pub emoji: String,
    #[serde(default)]
    pub color_class: PanelColor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
}

impl PanelEntry {
    /// Ordinary panel entry.
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        emoji: impl Into<String>,
        color_class: PanelColor,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            emoji: emoji.into(),
            color_class,
            is_featured: false,
        }
    }

    /// Same entry marked as the featured one.
    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

fn emoji_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_emoji))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MenuDocument {
    /// Shape-checks an untyped JSON value.
    pub fn from_value(value: serde_json::Value) -> MenuResult<Self> {
        serde_json::from_value(value).map_err(|e| MenuError::MalformedDocument(e.to_string()))
    }

    /// Parses document text.
    pub fn from_json(text: &str) -> MenuResult<Self> {
        serde_json::from_str(text).map_err(|e| MenuError::InvalidFormat(e.to_string()))
    }

    /// Structural checks that serde cannot express.
    pub fn validate(&self) -> MenuResult<()> {
        let featured = self.panels.iter().filter(|p| p.is_featured).count();
        if featured > 1 {
            return Err(MenuError::MalformedDocument(format!(
                "expected at most one featured panel, found {}",
                featured
            )));
        }
        Ok(())
    }

    /// The featured entry, if the document carries one.
    pub fn featured(&self) -> Option<&PanelEntry> {
        self.panels.iter().find(|p| p.is_featured)
    }
}

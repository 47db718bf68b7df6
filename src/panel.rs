//! Menu panel entity and its color categories.
//!
//! A panel is one menu item on the board. Ordinary panels live in one of two
//! columns; the single featured panel lives in its own slot above them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Glyph used when a panel has no emoji of its own
pub const DEFAULT_EMOJI: &str = "🍔";

/// Placeholder title for panels created with `add_panel`
pub const NEW_PANEL_TITLE: &str = "NEW ITEM";

/// Placeholder price for panels created with `add_panel`
pub const NEW_PANEL_PRICE: &str = "$0.00";

/// Store-assigned identifier of a live panel. Never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visual category of a panel.
///
/// Serialized as its CSS-style class name (`"green-panel"`, ...). Anything
/// unrecognized, including a missing value, falls back to [`PanelColor::Gray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelColor {
    Green,
    Blue,
    Yellow,
    Pink,
    Beige,
    White,
    Brown,
    #[default]
    Gray,
}

static COLOR_BY_CLASS: Lazy<HashMap<&'static str, PanelColor>> = Lazy::new(|| {
    PanelColor::ALL
        .iter()
        .map(|color| (color.class_name(), *color))
        .collect()
});

impl PanelColor {
    /// Every category, in palette order
    pub const ALL: [PanelColor; 8] = [
        PanelColor::Green,
        PanelColor::Blue,
        PanelColor::Yellow,
        PanelColor::Pink,
        PanelColor::Beige,
        PanelColor::White,
        PanelColor::Brown,
        PanelColor::Gray,
    ];

    /// Class name used in documents
    pub fn class_name(self) -> &'static str {
        match self {
            PanelColor::Green => "green-panel",
            PanelColor::Blue => "blue-panel",
            PanelColor::Yellow => "yellow-panel",
            PanelColor::Pink => "pink-panel",
            PanelColor::Beige => "beige-panel",
            PanelColor::White => "white-panel",
            PanelColor::Brown => "brown-panel",
            PanelColor::Gray => "gray-panel",
        }
    }

    /// Human-readable label for color pickers
    pub fn label(self) -> &'static str {
        match self {
            PanelColor::Green => "Green",
            PanelColor::Blue => "Blue",
            PanelColor::Yellow => "Yellow",
            PanelColor::Pink => "Pink",
            PanelColor::Beige => "Beige",
            PanelColor::White => "White",
            PanelColor::Brown => "Brown",
            PanelColor::Gray => "Gray",
        }
    }

    /// Position in [`PanelColor::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolves a class name, falling back to gray for anything unknown.
    pub fn from_class(class: &str) -> PanelColor {
        COLOR_BY_CLASS.get(class.trim()).copied().unwrap_or_default()
    }
}

impl Serialize for PanelColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.class_name())
    }
}

impl<'de> Deserialize<'de> for PanelColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let class = Option::<String>::deserialize(deserializer)?;
        Ok(class.as_deref().map(PanelColor::from_class).unwrap_or_default())
    }
}

/// One of the two parallel columns holding ordinary panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// Column chosen for the entry at `index` of a document's panel list.
    pub fn for_index(index: usize) -> Column {
        if index % 2 == 0 {
            Column::Left
        } else {
            Column::Right
        }
    }

    pub fn other(self) -> Column {
        match self {
            Column::Left => Column::Right,
            Column::Right => Column::Left,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Right => 1,
        }
    }
}

/// Text field of a panel that can be edited inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Title,
    Price,
    Emoji,
}

/// Reordering step for an ordinary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMove {
    /// One slot towards the top of its column
    Up,
    /// One slot towards the bottom of its column
    Down,
    /// To the bottom of the other column
    Across,
}

/// A live menu panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    id: PanelId,
    pub title: String,
    pub price: String,
    pub emoji: String,
    pub color: PanelColor,
    featured: bool,
}

impl Panel {
    /// Creates an ordinary (non-featured) panel.
    pub fn new(
        id: PanelId,
        title: impl Into<String>,
        price: impl Into<String>,
        emoji: impl Into<String>,
        color: PanelColor,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price: price.into(),
            emoji: emoji.into(),
            color,
            featured: false,
        }
    }

    /// Creates the featured panel. Only the store builds one of these.
    pub(crate) fn featured(
        id: PanelId,
        title: impl Into<String>,
        price: impl Into<String>,
        emoji: impl Into<String>,
        color: PanelColor,
    ) -> Self {
        Self {
            featured: true,
            ..Self::new(id, title, price, emoji, color)
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Mutable access to one of the text fields.
    pub fn field_mut(&mut self, field: PanelField) -> &mut String {
        match field {
            PanelField::Title => &mut self.title,
            PanelField::Price => &mut self.price,
            PanelField::Emoji => &mut self.emoji,
        }
    }
}

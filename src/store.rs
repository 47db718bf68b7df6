//! The menu state store.
//!
//! [`MenuStateStore`] owns the live board: header text, the featured panel
//! and two columns of ordinary panels. It converts that board to and from
//! [`MenuDocument`] snapshots and writes those snapshots to eframe's
//! key-value storage.
//!
//! Document order of the board is: featured panel, left column top to
//! bottom, right column top to bottom. When a document is applied, ordinary
//! panels are dealt into columns by the parity of their index in the
//! document's panel list, so column membership does not survive a round
//! trip.

use crate::document::{MenuDocument, PanelEntry};
use crate::error::{MenuError, MenuResult};
use crate::panel::{
    Column, Panel, PanelColor, PanelField, PanelId, PanelMove, DEFAULT_EMOJI, NEW_PANEL_PRICE,
    NEW_PANEL_TITLE,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Storage key holding the persisted board
pub const STORAGE_KEY: &str = "menuBoardData";

/// Default file name offered when exporting
pub const EXPORT_FILE_NAME: &str = "menu-board.json";

const DEFAULT_RESTAURANT_NAME: &str = "OUR MENU";
const DEFAULT_SUBTITLE: &str = "FRESH • FAST • DELICIOUS";
const DEFAULT_FEATURED_TITLE: &str = "TODAY'S SPECIAL";
const DEFAULT_FEATURED_PRICE: &str = "$9.99";

/// Live menu board and its synchronization operations.
#[derive(Debug, Clone)]
pub struct MenuStateStore {
    restaurant_name: String,
    subtitle: String,
    featured: Panel,
    /// Ordinary panels, `[left, right]`
    columns: [Vec<Panel>; 2],
    next_id: u64,
}

impl Default for MenuStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStateStore {
    /// Creates the startup board: default header, default featured panel,
    /// both columns empty.
    pub fn new() -> Self {
        Self {
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            featured: Panel::featured(
                PanelId(0),
                DEFAULT_FEATURED_TITLE,
                DEFAULT_FEATURED_PRICE,
                DEFAULT_EMOJI,
                PanelColor::Yellow,
            ),
            columns: [Vec::new(), Vec::new()],
            next_id: 1,
        }
    }

    // ===== Queries =====

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn featured(&self) -> &Panel {
        &self.featured
    }

    /// Ordinary panels of one column, top to bottom.
    pub fn column(&self, column: Column) -> &[Panel] {
        &self.columns[column.slot()]
    }

    /// Number of ordinary panels on the board.
    pub fn panel_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// All panels in document order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        std::iter::once(&self.featured).chain(self.columns.iter().flatten())
    }

    /// Looks up any panel, featured included.
    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels().find(|p| p.id() == id)
    }

    /// Column and row of an ordinary panel.
    pub fn position(&self, id: PanelId) -> Option<(Column, usize)> {
        [Column::Left, Column::Right].into_iter().find_map(|column| {
            self.column(column)
                .iter()
                .position(|p| p.id() == id)
                .map(|row| (column, row))
        })
    }

    // ===== Snapshot =====

    /// Builds a document describing the whole board.
    pub fn extract(&self) -> MenuDocument {
        MenuDocument {
            restaurant_name: Some(self.restaurant_name.clone()),
            subtitle: Some(self.subtitle.clone()),
            panels: self
                .panels()
                .map(|panel| PanelEntry {
                    title: panel.title.clone(),
                    price: panel.price.clone(),
                    emoji: panel.emoji.clone(),
                    color_class: panel.color,
                    is_featured: panel.is_featured(),
                })
                .collect(),
        }
    }

    /// Replaces the board with one derived from `doc`.
    ///
    /// Header fields are only written when present and non-empty. Every
    /// ordinary panel is dropped and rebuilt from `doc.panels`; a featured
    /// entry only updates the featured panel's price and emoji. The document
    /// is validated first and nothing changes if it is rejected.
    pub fn apply(&mut self, doc: &MenuDocument) -> MenuResult<()> {
        doc.validate()?;

        if let Some(name) = doc.restaurant_name.as_deref().filter(|s| !s.is_empty()) {
            self.restaurant_name = name.to_string();
        }
        if let Some(subtitle) = doc.subtitle.as_deref().filter(|s| !s.is_empty()) {
            self.subtitle = subtitle.to_string();
        }

        for column in &mut self.columns {
            column.clear();
        }

        for (index, entry) in doc.panels.iter().enumerate() {
            if entry.is_featured {
                self.featured.price = entry.price.clone();
                self.featured.emoji = entry.emoji.clone();
            } else {
                let panel = Panel::new(
                    self.allocate_id(),
                    entry.title.clone(),
                    entry.price.clone(),
                    entry.emoji.clone(),
                    entry.color_class,
                );
                self.columns[Column::for_index(index).slot()].push(panel);
            }
        }

        Ok(())
    }

    /// Shape-checks an untyped JSON value and applies it.
    pub fn apply_value(&mut self, value: serde_json::Value) -> MenuResult<()> {
        let doc = MenuDocument::from_value(value)?;
        self.apply(&doc)
    }

    // ===== Persistence =====

    /// Writes the board under [`STORAGE_KEY`].
    pub fn try_persist(&self, storage: Option<&mut (dyn eframe::Storage + '_)>) -> MenuResult<()> {
        let storage = storage
            .ok_or_else(|| MenuError::StorageUnavailable("no storage backend".to_string()))?;
        let text = serde_json::to_string(&self.extract())
            .map_err(|e| MenuError::StorageUnavailable(e.to_string()))?;
        storage.set_string(STORAGE_KEY, text);
        storage.flush();
        Ok(())
    }

    /// Writes the board, logging instead of failing.
    pub fn persist(&self, storage: Option<&mut (dyn eframe::Storage + '_)>) {
        match self.try_persist(storage) {
            Ok(()) => log::debug!("Menu board saved ({} panels)", self.panel_count()),
            Err(e) => log::warn!("Could not save menu board: {}", e),
        }
    }

    /// Loads the board saved under [`STORAGE_KEY`].
    ///
    /// Returns `Ok(false)` when nothing was saved. A stored value that does
    /// not parse or apply leaves the board untouched.
    pub fn try_restore(&mut self, storage: Option<&dyn eframe::Storage>) -> MenuResult<bool> {
        let storage = storage
            .ok_or_else(|| MenuError::StorageUnavailable("no storage backend".to_string()))?;
        let Some(text) = storage.get_string(STORAGE_KEY) else {
            return Ok(false);
        };
        let doc = MenuDocument::from_json(&text)?;
        self.apply(&doc)?;
        Ok(true)
    }

    /// Loads the saved board, logging and abandoning on any failure.
    pub fn restore(&mut self, storage: Option<&dyn eframe::Storage>) {
        match self.try_restore(storage) {
            Ok(true) => log::info!("Restored saved menu ({} panels)", self.panel_count()),
            Ok(false) => log::info!("No saved menu found, starting with the default board"),
            Err(e) => log::warn!("Error loading saved menu: {}", e),
        }
    }

    // ===== Export / import =====

    /// Pretty-printed document of the current board.
    pub fn export_document(&self) -> MenuResult<String> {
        serde_json::to_string_pretty(&self.extract())
            .map_err(|e| MenuError::InvalidFormat(e.to_string()))
    }

    /// Parses `text` and applies it. Nothing changes if parsing fails.
    pub fn import_document(&mut self, text: &str) -> MenuResult<()> {
        let doc = MenuDocument::from_json(text)?;
        self.apply(&doc)
    }

    // ===== Panel lifecycle =====

    /// Appends a placeholder panel with a random color to the right column.
    pub fn add_panel<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PanelId {
        let color = PanelColor::ALL
            .choose(rng)
            .copied()
            .unwrap_or_default();
        let id = self.allocate_id();
        self.columns[Column::Right.slot()].push(Panel::new(
            id,
            NEW_PANEL_TITLE,
            NEW_PANEL_PRICE,
            DEFAULT_EMOJI,
            color,
        ));
        id
    }

    /// Removes an ordinary panel and returns it.
    pub fn delete_panel(&mut self, id: PanelId) -> MenuResult<Panel> {
        if id == self.featured.id() {
            return Err(MenuError::FeaturedPanelProtected);
        }
        let (column, row) = self.position(id).ok_or(MenuError::PanelNotFound(id))?;
        Ok(self.columns[column.slot()].remove(row))
    }

    /// Moves an ordinary panel within or across columns.
    ///
    /// Moving past either end of a column is a no-op.
    pub fn move_panel(&mut self, id: PanelId, step: PanelMove) -> MenuResult<()> {
        if id == self.featured.id() {
            return Err(MenuError::FeaturedPanelProtected);
        }
        let (column, row) = self.position(id).ok_or(MenuError::PanelNotFound(id))?;
        let panels = &mut self.columns[column.slot()];
        match step {
            PanelMove::Up if row > 0 => panels.swap(row, row - 1),
            PanelMove::Down if row + 1 < panels.len() => panels.swap(row, row + 1),
            PanelMove::Across => {
                let panel = panels.remove(row);
                self.columns[column.other().slot()].push(panel);
            }
            _ => {}
        }
        Ok(())
    }

    // ===== Inline edits =====

    pub fn set_restaurant_name(&mut self, name: impl Into<String>) {
        self.restaurant_name = name.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    /// Replaces one text field of a panel.
    ///
    /// Only price and emoji of the featured panel are editable; its title is
    /// never carried by `apply`, so an edited one would not survive a restore.
    pub fn edit_panel(&mut self, id: PanelId, field: PanelField, value: impl Into<String>) -> MenuResult<()> {
        if id == self.featured.id() && field == PanelField::Title {
            return Err(MenuError::FeaturedPanelProtected);
        }
        *self.panel_mut(id)?.field_mut(field) = value.into();
        Ok(())
    }

    /// Recolors an ordinary panel.
    pub fn set_panel_color(&mut self, id: PanelId, color: PanelColor) -> MenuResult<()> {
        if id == self.featured.id() {
            return Err(MenuError::FeaturedPanelProtected);
        }
        self.panel_mut(id)?.color = color;
        Ok(())
    }

    fn panel_mut(&mut self, id: PanelId) -> MenuResult<&mut Panel> {
        std::iter::once(&mut self.featured)
            .chain(self.columns.iter_mut().flatten())
            .find(|p| p.id() == id)
            .ok_or(MenuError::PanelNotFound(id))
    }

    fn allocate_id(&mut self) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn titles(store: &MenuStateStore, column: Column) -> Vec<&str> {
        store.column(column).iter().map(|p| p.title.as_str()).collect()
    }

    fn sample_doc() -> MenuDocument {
        MenuDocument {
            restaurant_name: Some("BURGER BARN".to_string()),
            subtitle: Some("SINCE 1987".to_string()),
            panels: vec![
                PanelEntry::new("CLASSIC", "$5.99", "🍔", PanelColor::Green),
                PanelEntry::new("FRIES", "$2.49", "🍟", PanelColor::Yellow),
                PanelEntry::new("SHAKE", "$3.99", "🥤", PanelColor::Pink),
            ],
        }
    }

    #[test]
    fn test_default_board() {
        let store = MenuStateStore::new();
        assert_eq!(store.restaurant_name(), "OUR MENU");
        assert_eq!(store.panel_count(), 0);
        assert!(store.featured().is_featured());

        let doc = store.extract();
        assert_eq!(doc.panels.len(), 1);
        assert!(doc.panels[0].is_featured);
    }

    #[test]
    fn test_apply_deals_columns_by_index_parity() {
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();

        assert_eq!(titles(&store, Column::Left), vec!["CLASSIC", "SHAKE"]);
        assert_eq!(titles(&store, Column::Right), vec!["FRIES"]);
        assert_eq!(store.restaurant_name(), "BURGER BARN");
        assert_eq!(store.subtitle(), "SINCE 1987");
    }

    #[test]
    fn test_featured_entry_counts_toward_parity() {
        let mut store = MenuStateStore::new();
        let doc = MenuDocument {
            panels: vec![
                PanelEntry::new("HERO", "$12.00", "🥩", PanelColor::Brown).featured(),
                PanelEntry::new("A", "$1", "🍕", PanelColor::Blue),
                PanelEntry::new("B", "$2", "🍕", PanelColor::Blue),
            ],
            ..Default::default()
        };
        store.apply(&doc).unwrap();

        assert_eq!(titles(&store, Column::Left), vec!["B"]);
        assert_eq!(titles(&store, Column::Right), vec!["A"]);
    }

    #[test]
    fn test_apply_replaces_existing_panels() {
        let mut store = MenuStateStore::new();
        let mut rng = StdRng::seed_from_u64(7);
        store.add_panel(&mut rng);
        store.add_panel(&mut rng);

        store.apply(&sample_doc()).unwrap();
        assert_eq!(store.panel_count(), 3);
        assert!(store.panels().all(|p| p.title != NEW_PANEL_TITLE));
    }

    #[test]
    fn test_partial_header_update() {
        let mut store = MenuStateStore::new();
        store.apply_value(serde_json::json!({"subtitle": "X"})).unwrap();

        assert_eq!(store.restaurant_name(), "OUR MENU");
        assert_eq!(store.subtitle(), "X");
    }

    #[test]
    fn test_empty_header_fields_are_ignored() {
        let mut store = MenuStateStore::new();
        store
            .apply_value(serde_json::json!({"restaurantName": "", "subtitle": ""}))
            .unwrap();
        assert_eq!(store.restaurant_name(), "OUR MENU");
        assert_eq!(store.subtitle(), "FRESH • FAST • DELICIOUS");
    }

    #[test]
    fn test_featured_title_and_color_never_overwritten() {
        let mut store = MenuStateStore::new();
        let doc = MenuDocument {
            panels: vec![PanelEntry::new("HIJACKED", "$1.00", "🌭", PanelColor::Blue).featured()],
            ..Default::default()
        };
        store.apply(&doc).unwrap();

        let featured = store.featured();
        assert_eq!(featured.title, "TODAY'S SPECIAL");
        assert_eq!(featured.color, PanelColor::Yellow);
        assert_eq!(featured.price, "$1.00");
        assert_eq!(featured.emoji, "🌭");
    }

    #[test]
    fn test_unknown_color_normalizes_on_apply() {
        let mut store = MenuStateStore::new();
        store
            .apply_value(serde_json::json!({
                "panels": [{"title": "GRAPE", "price": "$1", "emoji": "🍇", "colorClass": "purple-panel"}]
            }))
            .unwrap();
        assert_eq!(store.column(Column::Left)[0].color, PanelColor::Gray);
    }

    #[test]
    fn test_malformed_value_leaves_board_untouched() {
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();
        let before = store.extract();

        let result = store.apply_value(serde_json::json!({
            "restaurantName": "CHANGED",
            "panels": [{"title": 5}]
        }));
        assert!(matches!(result, Err(MenuError::MalformedDocument(_))));
        assert_eq!(store.extract(), before);
    }

    #[test]
    fn test_two_featured_entries_rejected_without_mutation() {
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();
        let before = store.extract();

        let mut doc = sample_doc();
        doc.restaurant_name = Some("CHANGED".to_string());
        doc.panels[0].is_featured = true;
        doc.panels[1].is_featured = true;

        assert!(matches!(store.apply(&doc), Err(MenuError::MalformedDocument(_))));
        assert_eq!(store.extract(), before);
    }

    #[test]
    fn test_import_invalid_format_leaves_board_untouched() {
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();
        let before = store.extract();

        let result = store.import_document("{\"panels\": [");
        assert!(matches!(result, Err(MenuError::InvalidFormat(_))));
        assert_eq!(store.extract(), before);
    }

    #[test]
    fn test_add_panel_defaults() {
        let mut store = MenuStateStore::new();
        let mut rng = StdRng::seed_from_u64(42);
        let id = store.add_panel(&mut rng);

        assert_eq!(store.panel_count(), 1);
        let panel = store.panel(id).unwrap();
        assert_eq!(panel.title, "NEW ITEM");
        assert_eq!(panel.price, "$0.00");
        assert_eq!(panel.emoji, "🍔");
        assert!(PanelColor::ALL.contains(&panel.color));
        assert!(!panel.is_featured());
    }

    #[test]
    fn test_add_panel_always_targets_right_column() {
        let mut store = MenuStateStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..3 {
            store.add_panel(&mut rng);
        }
        assert_eq!(store.column(Column::Left).len(), 0);
        assert_eq!(store.column(Column::Right).len(), 3);
    }

    #[test]
    fn test_add_panel_ids_are_unique() {
        let mut store = MenuStateStore::new();
        let mut rng = StdRng::seed_from_u64(3);
        let a = store.add_panel(&mut rng);
        let b = store.add_panel(&mut rng);
        assert_ne!(a, b);
        assert_ne!(a, store.featured().id());
    }

    #[test]
    fn test_delete_panel() {
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();
        let id = store.column(Column::Right)[0].id();

        let removed = store.delete_panel(id).unwrap();
        assert_eq!(removed.title, "FRIES");
        assert_eq!(store.panel_count(), 2);
        assert_eq!(store.delete_panel(id), Err(MenuError::PanelNotFound(id)));
    }

    #[test]
    fn test_delete_featured_is_rejected() {
        let mut store = MenuStateStore::new();
        let before = store.extract();
        let featured = store.featured().id();

        assert_eq!(store.delete_panel(featured), Err(MenuError::FeaturedPanelProtected));
        assert_eq!(store.extract(), before);
    }

    #[test]
    fn test_move_panel_within_and_across_columns() {
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();
        let shake = store.column(Column::Left)[1].id();

        store.move_panel(shake, PanelMove::Up).unwrap();
        assert_eq!(titles(&store, Column::Left), vec!["SHAKE", "CLASSIC"]);

        // Already at the top
        store.move_panel(shake, PanelMove::Up).unwrap();
        assert_eq!(titles(&store, Column::Left), vec!["SHAKE", "CLASSIC"]);

        store.move_panel(shake, PanelMove::Across).unwrap();
        assert_eq!(titles(&store, Column::Left), vec!["CLASSIC"]);
        assert_eq!(titles(&store, Column::Right), vec!["FRIES", "SHAKE"]);

        let fries = store.column(Column::Right)[0].id();
        store.move_panel(fries, PanelMove::Down).unwrap();
        assert_eq!(titles(&store, Column::Right), vec!["SHAKE", "FRIES"]);

        let featured = store.featured().id();
        assert_eq!(
            store.move_panel(featured, PanelMove::Across),
            Err(MenuError::FeaturedPanelProtected)
        );
    }

    #[test]
    fn test_inline_edits() {
        let mut store = MenuStateStore::new();
        let mut rng = StdRng::seed_from_u64(9);
        let id = store.add_panel(&mut rng);
        let featured = store.featured().id();

        store.edit_panel(id, PanelField::Title, "NACHOS").unwrap();
        store.edit_panel(id, PanelField::Price, "$4.50").unwrap();
        store.set_panel_color(id, PanelColor::Beige).unwrap();
        store.edit_panel(featured, PanelField::Price, "$11.00").unwrap();
        store.set_restaurant_name("TACO TOWN");

        let panel = store.panel(id).unwrap();
        assert_eq!(panel.title, "NACHOS");
        assert_eq!(panel.price, "$4.50");
        assert_eq!(panel.color, PanelColor::Beige);
        assert_eq!(store.featured().price, "$11.00");
        assert_eq!(store.restaurant_name(), "TACO TOWN");
        assert_eq!(
            store.set_panel_color(featured, PanelColor::Blue),
            Err(MenuError::FeaturedPanelProtected)
        );
        assert_eq!(
            store.edit_panel(PanelId(999), PanelField::Emoji, "🍩"),
            Err(MenuError::PanelNotFound(PanelId(999)))
        );
    }

    /// Document with panels sorted by title, ignoring column placement.
    fn content_of(store: &MenuStateStore) -> MenuDocument {
        let mut doc = store.extract();
        doc.panels.sort_by(|a, b| a.title.cmp(&b.title));
        doc
    }

    #[test]
    fn test_persist_and_restore() {
        let mut storage = MockStorage::new();
        let mut store = MenuStateStore::new();
        store.apply(&sample_doc()).unwrap();
        store.try_persist(Some(&mut storage)).unwrap();

        let mut restored = MenuStateStore::new();
        assert_eq!(restored.try_restore(Some(&storage)), Ok(true));
        assert_eq!(restored.restaurant_name(), "BURGER BARN");
        assert_eq!(restored.panel_count(), 3);
        assert_eq!(content_of(&restored), content_of(&store));
    }

    #[test]
    fn test_edited_board_survives_restore() {
        let mut storage = MockStorage::new();
        let mut rng = StdRng::seed_from_u64(4);
        let mut store = MenuStateStore::new();
        let featured = store.featured().id();
        let id = store.add_panel(&mut rng);

        store.edit_panel(id, PanelField::Title, "CHURROS").unwrap();
        store.edit_panel(id, PanelField::Emoji, "🍩").unwrap();
        store.set_panel_color(id, PanelColor::Brown).unwrap();
        store.edit_panel(featured, PanelField::Price, "$5.55").unwrap();
        store.edit_panel(featured, PanelField::Emoji, "🌯").unwrap();
        assert_eq!(
            store.edit_panel(featured, PanelField::Title, "CHEF'S PICK"),
            Err(MenuError::FeaturedPanelProtected)
        );
        store.set_subtitle("LATE NIGHT");
        store.try_persist(Some(&mut storage)).unwrap();

        let mut restored = MenuStateStore::new();
        assert_eq!(restored.try_restore(Some(&storage)), Ok(true));
        assert_eq!(restored.extract(), store.extract());
    }

    #[test]
    fn test_restore_without_saved_data_is_noop() {
        let storage = MockStorage::new();
        let mut store = MenuStateStore::new();
        let before = store.extract();

        assert_eq!(store.try_restore(Some(&storage)), Ok(false));
        assert_eq!(store.extract(), before);
    }

    #[test]
    fn test_restore_malformed_leaves_defaults() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, STORAGE_KEY, "{broken".to_string());

        let mut store = MenuStateStore::new();
        let before = store.extract();
        store.restore(Some(&storage));
        assert_eq!(store.extract(), before);
    }

    #[test]
    fn test_missing_storage_is_unavailable() {
        let mut store = MenuStateStore::new();
        assert!(matches!(store.try_persist(None), Err(MenuError::StorageUnavailable(_))));
        assert!(matches!(store.try_restore(None), Err(MenuError::StorageUnavailable(_))));
        // Logging wrappers swallow the failure
        store.persist(None);
        store.restore(None);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let store = MenuStateStore::new();
        let text = store.export_document().unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"restaurantName\": \"OUR MENU\""));
    }
}

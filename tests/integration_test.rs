use menuboard::{Column, MenuDocument, MenuError, MenuStateStore, PanelColor, PanelEntry, PanelField, PanelMove};
use menuboard::{DEFAULT_EMOJI, STORAGE_KEY};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::collections::HashMap;

/// In-memory stand-in for eframe's persistent storage
#[derive(Default)]
struct MockStorage {
    data: HashMap<String, String>,
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

fn sample_document() -> MenuDocument {
    MenuDocument {
        restaurant_name: Some("JOE'S DINER".to_string()),
        subtitle: Some("OPEN LATE".to_string()),
        panels: vec![
            PanelEntry::new("TODAY'S SPECIAL", "$12.50", "🌮", PanelColor::Yellow).featured(),
            PanelEntry::new("BURGER", "$8.99", "🍔", PanelColor::Green),
            PanelEntry::new("FRIES", "$3.49", "🍟", PanelColor::Blue),
            PanelEntry::new("SHAKE", "$4.99", "🥤", PanelColor::Pink),
            PanelEntry::new("SALAD", "$6.25", "🥗", PanelColor::Beige),
        ],
    }
}

fn titles(store: &MenuStateStore, column: Column) -> Vec<&str> {
    store.column(column).iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn test_apply_then_extract_preserves_content() -> Result<()> {
    let mut store = MenuStateStore::new();
    let doc = sample_document();
    store.apply(&doc)?;

    let extracted = store.extract();
    assert_eq!(extracted.restaurant_name, doc.restaurant_name);
    assert_eq!(extracted.subtitle, doc.subtitle);
    assert_eq!(extracted.panels.len(), doc.panels.len());

    // Columns are rebuilt by index parity: odd indices go right
    assert_eq!(titles(&store, Column::Left), vec!["FRIES", "SALAD"]);
    assert_eq!(titles(&store, Column::Right), vec!["BURGER", "SHAKE"]);

    let mut extracted_titles: Vec<_> = extracted.panels.iter().map(|p| p.title.clone()).collect();
    let mut doc_titles: Vec<_> = doc.panels.iter().map(|p| p.title.clone()).collect();
    extracted_titles.sort();
    doc_titles.sort();
    // The featured title is not carried over, only its price and emoji
    assert_eq!(store.featured().title, "TODAY'S SPECIAL");
    assert_eq!(extracted_titles, doc_titles);
    Ok(())
}

#[test]
fn test_export_import_round_trip() -> Result<()> {
    let mut source = MenuStateStore::new();
    source.apply(&sample_document())?;
    let mut rng = StdRng::seed_from_u64(3);
    let id = source.add_panel(&mut rng);
    source.edit_panel(id, PanelField::Title, "PIE")?;

    let text = source.export_document()?;
    assert!(text.contains("\"restaurantName\""));
    assert!(text.contains("\"isFeatured\": true"));

    let mut target = MenuStateStore::new();
    target.import_document(&text)?;

    assert_eq!(target.restaurant_name(), "JOE'S DINER");
    assert_eq!(target.featured().price, "$12.50");
    assert_eq!(target.featured().emoji, "🌮");
    assert_eq!(target.panel_count(), source.panel_count());

    // Exporting again gives the same document, modulo column placement
    let mut again: Vec<_> = target.extract().panels;
    let mut before: Vec<_> = source.extract().panels;
    again.sort_by(|a, b| a.title.cmp(&b.title));
    before.sort_by(|a, b| a.title.cmp(&b.title));
    assert_eq!(again, before);
    Ok(())
}

#[test]
fn test_partial_document_keeps_header() -> Result<()> {
    let mut store = MenuStateStore::new();
    store.apply_value(json!({
        "panels": [{"title": "SOUP", "price": "$5"}]
    }))?;

    assert_eq!(store.restaurant_name(), "OUR MENU");
    assert_eq!(store.subtitle(), "FRESH • FAST • DELICIOUS");
    assert_eq!(titles(&store, Column::Left), vec!["SOUP"]);

    store.apply_value(json!({"restaurantName": "", "subtitle": "DAILY"}))?;
    assert_eq!(store.restaurant_name(), "OUR MENU");
    assert_eq!(store.subtitle(), "DAILY");
    // A document without panels still clears the columns
    assert_eq!(store.panel_count(), 0);
    Ok(())
}

#[test]
fn test_malformed_import_leaves_board_untouched() -> Result<()> {
    let mut store = MenuStateStore::new();
    store.apply(&sample_document())?;
    let before = store.extract();

    let err = store.import_document("{ not json").unwrap_err();
    assert!(matches!(err, MenuError::InvalidFormat(_)));

    let err = store
        .apply_value(json!({"panels": "burgers"}))
        .unwrap_err();
    assert!(matches!(err, MenuError::MalformedDocument(_)));

    let err = store
        .apply_value(json!({"panels": [
            {"title": "A", "isFeatured": true},
            {"title": "B", "isFeatured": true}
        ]}))
        .unwrap_err();
    assert!(matches!(err, MenuError::MalformedDocument(_)));

    assert_eq!(store.extract(), before);
    Ok(())
}

#[test]
fn test_missing_fields_use_defaults() -> Result<()> {
    let mut store = MenuStateStore::new();
    store.apply_value(json!({"panels": [
        {"title": "TEA", "colorClass": "purple-panel"},
        {"title": "COFFEE", "emoji": null, "colorClass": null},
        {"title": "COCOA", "colorClass": "brown-panel", "emoji": "☕"}
    ]}))?;

    let left = store.column(Column::Left);
    let right = store.column(Column::Right);
    assert_eq!(left[0].color, PanelColor::Gray);
    assert_eq!(left[0].price, "");
    assert_eq!(left[0].emoji, DEFAULT_EMOJI);
    assert_eq!(right[0].color, PanelColor::Gray);
    assert_eq!(right[0].emoji, DEFAULT_EMOJI);
    assert_eq!(left[1].color, PanelColor::Brown);
    assert_eq!(left[1].emoji, "☕");
    Ok(())
}

#[test]
fn test_added_panel_defaults() {
    let mut store = MenuStateStore::new();
    let mut rng = StdRng::seed_from_u64(42);
    let id = store.add_panel(&mut rng);

    let panel = store.panel(id).expect("panel was just added");
    assert_eq!(panel.title, "NEW ITEM");
    assert_eq!(panel.price, "$0.00");
    assert_eq!(panel.emoji, DEFAULT_EMOJI);
    assert!(PanelColor::ALL.contains(&panel.color));
    assert!(!panel.is_featured());
    assert_eq!(store.position(id), Some((Column::Right, 0)));
}

#[test]
fn test_featured_panel_is_protected() {
    let mut store = MenuStateStore::new();
    let featured = store.featured().id();

    assert_eq!(store.delete_panel(featured), Err(MenuError::FeaturedPanelProtected));
    assert_eq!(store.move_panel(featured, PanelMove::Across), Err(MenuError::FeaturedPanelProtected));
    assert_eq!(
        store.set_panel_color(featured, PanelColor::Pink),
        Err(MenuError::FeaturedPanelProtected)
    );

    assert_eq!(
        store.edit_panel(featured, PanelField::Title, "CHEF'S PICK"),
        Err(MenuError::FeaturedPanelProtected)
    );
    assert_eq!(store.featured().title, "TODAY'S SPECIAL");

    // Price and emoji of the featured panel stay editable
    assert_eq!(store.edit_panel(featured, PanelField::Price, "$7.77"), Ok(()));
    assert_eq!(store.featured().price, "$7.77");
}

#[test]
fn test_move_and_delete_panels() -> Result<()> {
    let mut store = MenuStateStore::new();
    let mut rng = StdRng::seed_from_u64(1);
    let first = store.add_panel(&mut rng);
    let second = store.add_panel(&mut rng);

    store.move_panel(second, PanelMove::Up)?;
    assert_eq!(store.position(second), Some((Column::Right, 0)));

    store.move_panel(first, PanelMove::Across)?;
    assert_eq!(store.position(first), Some((Column::Left, 0)));

    // Already at the top: nothing moves
    store.move_panel(first, PanelMove::Up)?;
    assert_eq!(store.position(first), Some((Column::Left, 0)));

    let removed = store.delete_panel(first)?;
    assert_eq!(removed.id(), first);
    assert_eq!(store.delete_panel(first), Err(MenuError::PanelNotFound(first)));
    assert_eq!(store.panel_count(), 1);
    Ok(())
}

#[test]
fn test_persist_and_restore() -> Result<()> {
    let mut storage = MockStorage::default();
    let mut store = MenuStateStore::new();
    store.apply(&sample_document())?;
    store.try_persist(Some(&mut storage))?;
    assert!(storage.data.contains_key(STORAGE_KEY));

    let mut restored = MenuStateStore::new();
    assert!(restored.try_restore(Some(&storage))?);
    assert_eq!(restored.restaurant_name(), "JOE'S DINER");
    assert_eq!(restored.panel_count(), 4);

    // Same content; columns are re-dealt by index parity
    let mut saved = store.extract().panels;
    let mut loaded = restored.extract().panels;
    saved.sort_by(|a, b| a.title.cmp(&b.title));
    loaded.sort_by(|a, b| a.title.cmp(&b.title));
    assert_eq!(loaded, saved);

    let mut empty = MenuStateStore::new();
    assert!(!empty.try_restore(Some(&MockStorage::default()))?);
    assert_eq!(empty.extract(), MenuStateStore::new().extract());
    Ok(())
}

#[test]
fn test_edited_board_reloads_unchanged() -> Result<()> {
    let mut storage = MockStorage::default();
    let mut rng = StdRng::seed_from_u64(8);
    let mut store = MenuStateStore::new();
    let featured = store.featured().id();
    let id = store.add_panel(&mut rng);

    store.set_restaurant_name("NIGHT OWL");
    store.edit_panel(id, PanelField::Title, "PANCAKES")?;
    store.edit_panel(id, PanelField::Price, "$6.50")?;
    store.edit_panel(featured, PanelField::Price, "$10.00")?;
    store.edit_panel(featured, PanelField::Emoji, "🥞")?;
    assert!(store.edit_panel(featured, PanelField::Title, "RENAMED").is_err());
    store.try_persist(Some(&mut storage))?;

    let mut restored = MenuStateStore::new();
    assert!(restored.try_restore(Some(&storage))?);
    assert_eq!(restored.extract(), store.extract());
    Ok(())
}

#[test]
fn test_corrupt_saved_board_is_ignored() {
    let mut storage = MockStorage::default();
    eframe::Storage::set_string(&mut storage, STORAGE_KEY, "][".to_string());

    let mut store = MenuStateStore::new();
    assert!(store.try_restore(Some(&storage)).is_err());
    store.restore(Some(&storage));
    assert_eq!(store.restaurant_name(), "OUR MENU");
    assert!(store.try_persist(None).is_err());
}

#[test]
fn test_apply_keeps_featured_title_and_color() -> Result<()> {
    let mut store = MenuStateStore::new();
    store.apply_value(json!({"panels": [
        {"title": "HIJACKED", "price": "$1.00", "emoji": "🍕", "colorClass": "green-panel", "isFeatured": true}
    ]}))?;

    let featured = store.featured();
    assert_eq!(featured.title, "TODAY'S SPECIAL");
    assert_eq!(featured.color, PanelColor::Yellow);
    assert_eq!(featured.price, "$1.00");
    assert_eq!(featured.emoji, "🍕");
    assert_eq!(store.panel_count(), 0);
    Ok(())
}

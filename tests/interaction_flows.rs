//! Integration tests driving whole user flows through the event layer
//! against a disk-backed store.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use larder::events::handle_key;
use larder::state::{AppState, Category, ItemDraft, Modal};
use larder::store::ItemStore;
use larder::theme::ThemeMode;

/// What: Press a plain key.
fn press(app: &mut AppState, code: KeyCode) -> bool {
    handle_key(app, &KeyEvent::new(code, KeyModifiers::NONE))
}

/// What: Press a Ctrl-modified character key.
fn press_ctrl(app: &mut AppState, c: char) -> bool {
    handle_key(app, &KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// What: Type a string into whatever currently has key focus.
fn type_str(app: &mut AppState, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
/// What: An item added through the form survives a process restart.
///
/// Inputs:
/// - Add flow (Ctrl+A, fill name/quantity/category, Enter) on a store backed
///   by a temp file; then a fresh load of the same file.
///
/// Output:
/// - The reloaded store holds the normalized item with its generated id.
fn add_flow_persists_across_reload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pantry.json");
    let mut app = AppState::new(ItemStore::load(path.clone()), ThemeMode::Light);
    press_ctrl(&mut app, 'a');
    type_str(&mut app, "Pastry cream");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "2");
    press(&mut app, KeyCode::Tab); // unit
    press(&mut app, KeyCode::Tab); // category
    type_str(&mut app, "filling");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.modal, Modal::None);

    let reloaded = ItemStore::load(path);
    assert_eq!(reloaded.all().len(), 1);
    let item = &reloaded.all()[0];
    assert_eq!(item.name, "Pastry cream");
    assert_eq!(item.quantity, "2");
    assert_eq!(item.category, Category::Filling);
    assert!(!item.id.is_empty());
}

#[test]
/// What: Search narrows the table and delete hits only the visible row.
///
/// Inputs:
/// - Two items on disk; term "milk"; Ctrl+D; then reload.
///
/// Output:
/// - Only the matching item is deleted, in memory and on disk.
fn search_then_delete_only_visible() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pantry.json");
    {
        let mut store = ItemStore::load(path.clone());
        store.add(ItemDraft {
            name: "Whole milk".into(),
            quantity: "6".into(),
            ..ItemDraft::default()
        });
        store.add(ItemDraft {
            name: "Plain flour".into(),
            quantity: "20".into(),
            ..ItemDraft::default()
        });
    }

    let mut app = AppState::new(ItemStore::load(path.clone()), ThemeMode::Light);
    type_str(&mut app, "milk");
    assert_eq!(app.visible_rows().len(), 1);
    press_ctrl(&mut app, 'd');

    assert_eq!(app.store.len(), 1);
    let reloaded = ItemStore::load(path);
    assert_eq!(reloaded.all().len(), 1);
    assert_eq!(reloaded.all()[0].name, "Plain flour");
}

#[test]
/// What: Editing through the form merges into the stored record.
///
/// Inputs:
/// - One item on disk; Enter to open the editor; quantity replaced; Enter.
///
/// Output:
/// - Same id and name, new quantity, persisted to disk.
fn edit_flow_merges_and_persists() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pantry.json");
    let original_id;
    {
        let mut store = ItemStore::load(path.clone());
        original_id = store
            .add(ItemDraft {
                name: "Butter".into(),
                quantity: "9".into(),
                ..ItemDraft::default()
            })
            .id;
    }

    let mut app = AppState::new(ItemStore::load(path.clone()), ThemeMode::Light);
    app.clamp_selection(app.visible_rows().len());
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.modal, Modal::Editor(_)));
    press(&mut app, KeyCode::Tab); // focus quantity
    press(&mut app, KeyCode::Backspace); // clear "9"
    type_str(&mut app, "1");
    press(&mut app, KeyCode::Enter);

    let reloaded = ItemStore::load(path);
    assert_eq!(reloaded.all().len(), 1);
    assert_eq!(reloaded.all()[0].id, original_id);
    assert_eq!(reloaded.all()[0].name, "Butter");
    assert_eq!(reloaded.all()[0].quantity, "1");
}

#[test]
/// What: Esc cancels the form without touching the collection.
///
/// Inputs:
/// - Add flow started and abandoned with Esc.
///
/// Output:
/// - Modal closed, store still empty, quit not triggered by the form Esc.
fn cancel_form_changes_nothing() {
    let mut app = AppState::new(ItemStore::in_memory(), ThemeMode::Light);
    press_ctrl(&mut app, 'a');
    type_str(&mut app, "Abandoned entry");
    let quit = press(&mut app, KeyCode::Esc);
    assert!(!quit);
    assert_eq!(app.modal, Modal::None);
    assert!(app.store.is_empty());
}

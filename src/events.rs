//! Event handling for Larder's TUI.
//!
//! Converts raw `crossterm` key events into mutations on [`AppState`]: search
//! input editing, table navigation, sort cycling, theme toggling, and the
//! add/edit form modal. All handling is synchronous; every event runs to
//! completion before the next is read.
//!
//! Key map outside the modal:
//! - printable chars / Backspace: edit the search term
//! - Up / Down: move the table selection
//! - Enter or Ctrl+E: edit the selected item
//! - Ctrl+A: add a new item
//! - Ctrl+D: delete the selected item
//! - Ctrl+S: cycle the sort mode
//! - Ctrl+T: toggle light/dark theme
//! - Esc or Ctrl+C: quit
//!
//! Inside the modal: chars edit the focused field (space toggles CCP), Tab /
//! Down and BackTab / Up move focus, Enter submits, Esc cancels.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, ItemForm, ItemPatch, Modal};
use crate::theme;

/// Dispatch a single input event, mutating `app`.
///
/// Output: `true` when the application should exit.
pub fn handle_event(app: &mut AppState, ev: &CEvent) -> bool {
    match ev {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => false,
    }
}

/// Dispatch one key press. Split from [`handle_event`] so tests can drive the
/// app without constructing terminal events.
pub fn handle_key(app: &mut AppState, key: &KeyEvent) -> bool {
    if let Modal::Editor(_) = &app.modal {
        handle_form_key(app, key);
        return false;
    }
    handle_table_key(app, key)
}

/// Key handling when no modal is open.
fn handle_table_key(app: &mut AppState, key: &KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('a') if ctrl => {
            app.modal = Modal::Editor(ItemForm::blank());
        }
        KeyCode::Char('e') if ctrl => open_editor_for_selected(app),
        KeyCode::Enter => open_editor_for_selected(app),
        KeyCode::Char('d') if ctrl => delete_selected(app),
        KeyCode::Char('s') if ctrl => {
            app.sort_mode = app.sort_mode.next();
            tracing::debug!(mode = app.sort_mode.label(), "sort mode changed");
        }
        KeyCode::Char('t') if ctrl => {
            app.theme_mode = app.theme_mode.toggled();
            if let Some(path) = &app.theme_conf {
                theme::settings::save_mode_to(path, app.theme_mode);
            }
        }
        KeyCode::Char(c) if !ctrl => {
            app.input.push(c);
            app.clamp_selection(app.visible_rows().len());
        }
        KeyCode::Backspace => {
            app.input.pop();
            app.clamp_selection(app.visible_rows().len());
        }
        KeyCode::Down => {
            let len = app.visible_rows().len();
            app.move_selection(true, len);
        }
        KeyCode::Up => {
            let len = app.visible_rows().len();
            app.move_selection(false, len);
        }
        _ => {}
    }
    false
}

/// Open the editor modal pre-filled with the currently selected row.
fn open_editor_for_selected(app: &mut AppState) {
    let rows = app.visible_rows();
    if let Some(row) = rows.get(app.selected) {
        app.modal = Modal::Editor(ItemForm::for_item(&row.item));
    }
}

/// Delete the currently selected row's item from the store.
fn delete_selected(app: &mut AppState) {
    let rows = app.visible_rows();
    if let Some(row) = rows.get(app.selected) {
        let id = row.item.id.clone();
        app.store.remove(&id);
        app.clamp_selection(app.visible_rows().len());
    }
}

/// Key handling while the editor modal is open.
fn handle_form_key(app: &mut AppState, key: &KeyEvent) {
    let Modal::Editor(form) = &mut app.modal else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            app.modal = Modal::None;
        }
        KeyCode::Enter => submit_form(app),
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.push_char(c);
        }
        _ => {}
    }
}

/// Validate and apply the editor form, closing the modal on success.
///
/// A blank name keeps the modal open (the only required field); everything
/// else is normalized rather than rejected. An edit whose target vanished is
/// logged and dropped, never an error the user sees.
fn submit_form(app: &mut AppState) {
    let Modal::Editor(form) = &app.modal else {
        return;
    };
    let draft = form.draft();
    if draft.name.is_empty() {
        return;
    }
    match &form.editing_id {
        Some(id) => {
            if let Err(e) = app.store.update(id, ItemPatch::from(draft)) {
                tracing::warn!(error = %e, "edit target disappeared");
            }
        }
        None => {
            app.store.add(draft);
        }
    }
    app.modal = Modal::None;
    app.clamp_selection(app.visible_rows().len());
}

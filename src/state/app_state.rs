//! Central `AppState` container.

use std::path::PathBuf;

use ratatui::widgets::TableState;

use crate::logic::{RowViewModel, build_rows};
use crate::state::modal::Modal;
use crate::state::types::SortMode;
use crate::store::ItemStore;
use crate::theme::ThemeMode;

/// Application state shared by the event and UI layers.
///
/// The item collection itself is owned by the embedded [`ItemStore`]; the
/// rest is transient view state that is rebuilt or reset per session.
#[derive(Debug)]
pub struct AppState {
    /// The pantry collection and its persistence.
    pub store: ItemStore,
    /// Current search input text.
    pub input: String,
    /// Current sort mode (never persisted).
    pub sort_mode: SortMode,
    /// Index into the visible rows that is currently highlighted.
    pub selected: usize,
    /// Table selection state for the item table.
    pub table_state: TableState,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Active palette preference.
    pub theme_mode: ThemeMode,
    /// Where the theme preference is written on toggle; `None` keeps it
    /// in memory only.
    pub theme_conf: Option<PathBuf>,
    /// When set, mutations are kept in memory only.
    pub read_only: bool,
}

impl AppState {
    /// Build state around a loaded store and theme preference.
    #[must_use]
    pub fn new(store: ItemStore, theme_mode: ThemeMode) -> Self {
        Self {
            store,
            input: String::new(),
            sort_mode: SortMode::Unsorted,
            selected: 0,
            table_state: TableState::default(),
            modal: Modal::None,
            theme_mode,
            theme_conf: None,
            read_only: false,
        }
    }

    /// Compute the display rows for the current view state.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<RowViewModel> {
        build_rows(
            self.store.all(),
            &self.input,
            self.sort_mode,
            crate::util::today(),
        )
    }

    /// Clamp the selection to `len` visible rows and sync the table state.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.table_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.table_state.select(Some(self.selected));
        }
    }

    /// Move the selection by one row in either direction, clamped.
    pub fn move_selection(&mut self, down: bool, len: usize) {
        if len == 0 {
            self.clamp_selection(0);
            return;
        }
        if down {
            self.selected = (self.selected + 1).min(len - 1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
        self.table_state.select(Some(self.selected));
    }
}

//! Application state: value types, the central container, and modal state.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::{FORM_FIELDS, FormField, ItemForm, Modal};
pub use types::{Category, ItemDraft, ItemPatch, PantryItem, SortMode, StorageKind};

//! The pantry item store: ownership, mutation, and persistence.
//!
//! Holds the full collection of [`PantryItem`] records in insertion order and
//! writes the whole thing to a single JSON file after every mutation. Reads
//! are tolerant: a missing or malformed data file degrades to an empty
//! collection instead of an error, so a corrupt file can never keep the app
//! from starting.

use std::fs;
use std::path::PathBuf;

use rand::RngExt;
use thiserror::Error;

use crate::state::{ItemDraft, ItemPatch, PantryItem};

/// Failures surfaced by store operations.
///
/// Nothing here is fatal; callers report and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item carries the requested id.
    #[error("no pantry item with id {0}")]
    NotFound(String),
}

/// Owning container for the pantry collection.
#[derive(Debug)]
pub struct ItemStore {
    /// All items, insertion order.
    items: Vec<PantryItem>,
    /// Persistence target; `None` keeps the store memory-only.
    path: Option<PathBuf>,
}

impl ItemStore {
    /// Create an empty store with no backing file (tests, `--read-only`).
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            items: Vec::new(),
            path: None,
        }
    }

    /// Load the collection from `path`, falling back to empty.
    ///
    /// Inputs: `path` — JSON file holding the serialized item array.
    ///
    /// Output: Store bound to `path`. Any read or parse failure is logged at
    /// debug level and yields an empty collection; this function never fails.
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let items = match fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str::<Vec<PantryItem>>(&s) {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "malformed pantry data; starting empty");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "no pantry data yet");
                Vec::new()
            }
        };
        tracing::info!(count = items.len(), path = %path.display(), "pantry loaded");
        Self {
            items,
            path: Some(path),
        }
    }

    /// Drop the backing file, keeping the loaded items memory-only.
    #[must_use]
    pub fn into_read_only(mut self) -> Self {
        self.path = None;
        self
    }

    /// All items in insertion order.
    #[must_use]
    pub fn all(&self) -> &[PantryItem] {
        &self.items
    }

    /// Number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&PantryItem> {
        self.items.iter().find(|it| it.id == id)
    }

    /// Create a new item from `draft`, append it, persist, and return it.
    ///
    /// The generated id combines the millisecond timestamp with a random hex
    /// suffix and is regenerated until it does not collide with an existing
    /// id.
    pub fn add(&mut self, draft: ItemDraft) -> PantryItem {
        let d = draft.normalized();
        let item = PantryItem {
            id: self.fresh_id(),
            name: d.name,
            quantity: d.quantity,
            unit: d.unit,
            category: d.category,
            storage: d.storage,
            allergens: d.allergens,
            expiry: d.expiry,
            is_ccp: d.is_ccp,
        };
        tracing::info!(id = %item.id, name = %item.name, "item added");
        self.items.push(item.clone());
        self.persist();
        item
    }

    /// Merge `patch` into the item with `id`, persist, and return the result.
    ///
    /// Output: The updated item, or [`StoreError::NotFound`] when no item has
    /// that id; the collection is left untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id.
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> Result<PantryItem, StoreError> {
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Some(name) = patch.name {
            item.name = name.trim().to_string();
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity.trim().to_string();
        }
        if let Some(unit) = patch.unit {
            item.unit = unit.trim().to_string();
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(storage) = patch.storage {
            item.storage = storage;
        }
        if let Some(allergens) = patch.allergens {
            item.allergens = allergens.trim().to_string();
        }
        if let Some(expiry) = patch.expiry {
            item.expiry = expiry.trim().to_string();
        }
        if let Some(is_ccp) = patch.is_ccp {
            item.is_ccp = is_ccp;
        }
        let updated = item.clone();
        tracing::info!(id = %updated.id, "item updated");
        self.persist();
        Ok(updated)
    }

    /// Delete the item with `id` if present and persist.
    ///
    /// Idempotent: removing an unknown id is a no-op (still persisted, which
    /// keeps the write-after-every-mutation rule trivially true).
    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        if self.items.len() != before {
            tracing::info!(id = %id, "item removed");
        }
        self.persist();
    }

    /// Write the whole collection to the backing file as JSON.
    ///
    /// Failures are logged and swallowed so a full disk or permissions issue
    /// never interrupts the UI.
    pub fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        match serde_json::to_string(&self.items) {
            Ok(s) => {
                if let Err(e) = fs::write(path, s) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to persist pantry");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize pantry"),
        }
    }

    /// Generate an id that does not collide with any existing item.
    fn fresh_id(&self) -> String {
        loop {
            let id = format!(
                "{}{:08x}",
                chrono::Utc::now().timestamp_millis(),
                rand::rng().random_range(0..=u32::MAX)
            );
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

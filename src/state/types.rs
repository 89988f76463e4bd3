//! Core value types used by Larder state.

use serde::{Deserialize, Serialize};

/// Ingredient category for a pantry item.
///
/// Serialized as a lowercase key (`flour`, `sugar`, ...). Unknown or empty
/// keys normalize to [`Category::Other`] so a hand-edited or stale data file
/// can never break lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Flours and other dough bases.
    Flour,
    /// Sugars and sweeteners.
    Sugar,
    /// Creams, custards, and other fillings.
    Filling,
    /// Toppings and decorations.
    Topping,
    /// Frozen or pre-prepared goods.
    Frozen,
    /// Anything else.
    #[default]
    Other,
}

impl Category {
    /// Parse a category from its stored key, falling back to `Other`.
    ///
    /// Inputs: `key` raw string (case-insensitive, surrounding whitespace ignored).
    ///
    /// Output: Matching variant, or `Other` for unknown/empty keys.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "flour" => Self::Flour,
            "sugar" => Self::Sugar,
            "filling" => Self::Filling,
            "topping" => Self::Topping,
            "frozen" => Self::Frozen,
            _ => Self::Other,
        }
    }

    /// Return the stable lowercase key used for persistence and search.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Flour => "flour",
            Self::Sugar => "sugar",
            Self::Filling => "filling",
            Self::Topping => "topping",
            Self::Frozen => "frozen",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flour => "Flour & bases",
            Self::Sugar => "Sugars & sweeteners",
            Self::Filling => "Fillings & creams",
            Self::Topping => "Toppings & decorations",
            Self::Frozen => "Frozen / prepared",
            Self::Other => "Other",
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::from_key(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_key().to_string()
    }
}

/// Where a pantry item is kept.
///
/// Serialized as `room`, `fridge`, `frozen`, or the empty string for
/// [`StorageKind::Unspecified`]. Unknown keys normalize to `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StorageKind {
    /// Room temperature shelf.
    Room,
    /// Refrigerated.
    Fridge,
    /// Frozen.
    Frozen,
    /// Not recorded.
    #[default]
    Unspecified,
}

impl StorageKind {
    /// Parse a storage kind from its stored key, falling back to `Unspecified`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "room" => Self::Room,
            "fridge" => Self::Fridge,
            "frozen" => Self::Frozen,
            _ => Self::Unspecified,
        }
    }

    /// Return the stable lowercase key used for persistence.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Fridge => "fridge",
            Self::Frozen => "frozen",
            Self::Unspecified => "",
        }
    }

    /// Human-readable label shown in the table; empty when unspecified.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Room => "Room temperature",
            Self::Fridge => "Fridge",
            Self::Frozen => "Freezer",
            Self::Unspecified => "",
        }
    }
}

impl From<String> for StorageKind {
    fn from(s: String) -> Self {
        Self::from_key(&s)
    }
}

impl From<StorageKind> for String {
    fn from(k: StorageKind) -> Self {
        k.as_key().to_string()
    }
}

/// A single pantry ingredient record.
///
/// The collection of these is the whole persisted state of the application.
/// `quantity` is kept as the raw string the user typed and only parsed
/// numerically for sorting and stock-level checks; `expiry` is an ISO date
/// (`YYYY-MM-DD`) or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Unique identifier, generated at creation and never reassigned.
    pub id: String,
    /// Ingredient name as entered (trimmed).
    pub name: String,
    /// Quantity as entered; compared numerically with non-numeric as 0.
    #[serde(default)]
    pub quantity: String,
    /// Optional unit of measure (kg, L, trays, ...).
    #[serde(default)]
    pub unit: String,
    /// Ingredient category.
    #[serde(default)]
    pub category: Category,
    /// Storage location.
    #[serde(default)]
    pub storage: StorageKind,
    /// Free-text allergen notes.
    #[serde(default)]
    pub allergens: String,
    /// ISO expiry date or empty when unknown.
    #[serde(default)]
    pub expiry: String,
    /// Critical Control Point food-safety flag.
    #[serde(default)]
    pub is_ccp: bool,
}

/// Fully specified input for creating a pantry item.
///
/// Produced by the add/edit form; [`ItemDraft::normalized`] applies the
/// trimming and defaulting rules once so the store only ever holds clean
/// records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    /// Ingredient name.
    pub name: String,
    /// Quantity as entered.
    pub quantity: String,
    /// Unit of measure.
    pub unit: String,
    /// Ingredient category.
    pub category: Category,
    /// Storage location.
    pub storage: StorageKind,
    /// Allergen notes.
    pub allergens: String,
    /// ISO expiry date or empty.
    pub expiry: String,
    /// CCP flag.
    pub is_ccp: bool,
}

impl ItemDraft {
    /// Return a copy with string fields trimmed.
    ///
    /// Inputs: none
    ///
    /// Output: Draft whose `name`, `quantity`, `unit`, `allergens`, and
    /// `expiry` have surrounding whitespace removed. Enum fields are already
    /// normalized by construction.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            unit: self.unit.trim().to_string(),
            category: self.category,
            storage: self.storage,
            allergens: self.allergens.trim().to_string(),
            expiry: self.expiry.trim().to_string(),
            is_ccp: self.is_ccp,
        }
    }
}

/// Partial update for an existing pantry item.
///
/// `None` fields are preserved; `Some` fields replace the stored value after
/// the same normalization as [`ItemDraft`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// New name, when provided.
    pub name: Option<String>,
    /// New quantity, when provided.
    pub quantity: Option<String>,
    /// New unit, when provided.
    pub unit: Option<String>,
    /// New category, when provided.
    pub category: Option<Category>,
    /// New storage location, when provided.
    pub storage: Option<StorageKind>,
    /// New allergen notes, when provided.
    pub allergens: Option<String>,
    /// New expiry date, when provided.
    pub expiry: Option<String>,
    /// New CCP flag, when provided.
    pub is_ccp: Option<bool>,
}

impl From<ItemDraft> for ItemPatch {
    fn from(d: ItemDraft) -> Self {
        let d = d.normalized();
        Self {
            name: Some(d.name),
            quantity: Some(d.quantity),
            unit: Some(d.unit),
            category: Some(d.category),
            storage: Some(d.storage),
            allergens: Some(d.allergens),
            expiry: Some(d.expiry),
            is_ccp: Some(d.is_ccp),
        }
    }
}

/// Ordering applied to the visible table.
///
/// Transient view state: re-chosen by the user each session, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order (no sorting).
    #[default]
    Unsorted,
    /// Name, case-insensitive ascending.
    NameAsc,
    /// Name, case-insensitive descending.
    NameDesc,
    /// Numeric quantity ascending; non-numeric treated as 0.
    Quantity,
    /// Expiry date ascending; empty/invalid dates sort last.
    Expiry,
}

impl SortMode {
    /// Advance to the next mode in the fixed cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unsorted => Self::NameAsc,
            Self::NameAsc => Self::NameDesc,
            Self::NameDesc => Self::Quantity,
            Self::Quantity => Self::Expiry,
            Self::Expiry => Self::Unsorted,
        }
    }

    /// Short label shown in the table title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unsorted => "added",
            Self::NameAsc => "name ↑",
            Self::NameDesc => "name ↓",
            Self::Quantity => "qty",
            Self::Expiry => "expiry",
        }
    }
}

//! Modal dialog state for the UI.

use crate::state::types::{Category, ItemDraft, PantryItem, StorageKind};

/// Index-addressable fields of the item editor form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Ingredient name (required).
    Name,
    /// Quantity.
    Quantity,
    /// Unit of measure.
    Unit,
    /// Category key.
    Category,
    /// Storage key.
    Storage,
    /// Allergen notes.
    Allergens,
    /// Expiry date (ISO).
    Expiry,
    /// CCP toggle.
    Ccp,
}

/// All editor fields in display order.
pub const FORM_FIELDS: [FormField; 8] = [
    FormField::Name,
    FormField::Quantity,
    FormField::Unit,
    FormField::Category,
    FormField::Storage,
    FormField::Allergens,
    FormField::Expiry,
    FormField::Ccp,
];

impl FormField {
    /// Label shown next to the input line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
            Self::Unit => "Unit",
            Self::Category => "Category",
            Self::Storage => "Storage",
            Self::Allergens => "Allergens",
            Self::Expiry => "Expiry (YYYY-MM-DD)",
            Self::Ccp => "CCP",
        }
    }
}

/// Number of free-text fields in the form (everything except the CCP toggle).
const TEXT_FIELD_COUNT: usize = 7;

/// In-progress add/edit form.
///
/// Text fields are edited as raw strings; category and storage are typed as
/// their keys and normalized on submit, so a typo degrades to the default
/// rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    /// `Some(id)` when editing an existing item; `None` when adding.
    pub editing_id: Option<String>,
    /// Raw text for each field, indexed in [`FORM_FIELDS`] order.
    pub texts: [String; TEXT_FIELD_COUNT],
    /// CCP toggle state.
    pub is_ccp: bool,
    /// Index into [`FORM_FIELDS`] of the focused field.
    pub focus: usize,
}

impl ItemForm {
    /// Create an empty form for adding a new item.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Create a form pre-filled from an existing item for editing.
    ///
    /// Inputs: `item` — the record whose fields seed the form.
    ///
    /// Output: Form with `editing_id` set and every field populated.
    #[must_use]
    pub fn for_item(item: &PantryItem) -> Self {
        Self {
            editing_id: Some(item.id.clone()),
            texts: [
                item.name.clone(),
                item.quantity.clone(),
                item.unit.clone(),
                item.category.as_key().to_string(),
                item.storage.as_key().to_string(),
                item.allergens.clone(),
                item.expiry.clone(),
            ],
            is_ccp: item.is_ccp,
            focus: 0,
        }
    }

    /// The currently focused field.
    #[must_use]
    pub const fn focused(&self) -> FormField {
        FORM_FIELDS[self.focus]
    }

    /// Move focus to the next field, wrapping.
    pub const fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FORM_FIELDS.len();
    }

    /// Move focus to the previous field, wrapping.
    pub const fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            FORM_FIELDS.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// Append `c` to the focused text field; toggles CCP when focused on it.
    pub fn push_char(&mut self, c: char) {
        if self.focus < TEXT_FIELD_COUNT {
            self.texts[self.focus].push(c);
        } else if c == ' ' {
            self.is_ccp = !self.is_ccp;
        }
    }

    /// Delete the last character of the focused text field, if any.
    pub fn pop_char(&mut self) {
        if self.focus < TEXT_FIELD_COUNT {
            self.texts[self.focus].pop();
        }
    }

    /// Materialize the form into a normalized [`ItemDraft`].
    ///
    /// Category and storage text is parsed through the enum key parsers, so
    /// unknown values fall back to their defaults instead of failing.
    #[must_use]
    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.texts[0].clone(),
            quantity: self.texts[1].clone(),
            unit: self.texts[2].clone(),
            category: Category::from_key(&self.texts[3]),
            storage: StorageKind::from_key(&self.texts[4]),
            allergens: self.texts[5].clone(),
            expiry: self.texts[6].clone(),
            is_ccp: self.is_ccp,
        }
        .normalized()
    }
}

/// Active modal dialog, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    /// No modal; the table receives input.
    #[default]
    None,
    /// The add/edit item form.
    Editor(ItemForm),
}

//! Food-safety classification heuristics.
//!
//! Pure functions of name + category, recomputed on every render — never
//! cached or stored on the item.

use crate::state::{Category, PantryItem};

/// Name fragments that mark an ingredient as spoilage-prone.
const RISK_WORDS: [&str; 8] = [
    "cream",
    "custard",
    "cheese",
    "milk",
    "dairy",
    "egg",
    "mousse",
    "fresh fruit",
];

/// Whether `item` is heuristically high-risk.
///
/// True when the category is Filling, or when the lowercased name contains
/// any of the fixed risk words.
#[must_use]
pub fn is_high_risk(item: &PantryItem) -> bool {
    if item.category == Category::Filling {
        return true;
    }
    let name = item.name.to_lowercase();
    RISK_WORDS.iter().any(|w| name.contains(w))
}

/// Build the safety column text for `item`.
///
/// Output: "Marked as CCP" and/or "High-risk ingredient" joined with a
/// bullet; "Normal risk" when neither applies.
#[must_use]
pub fn safety_label(item: &PantryItem) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2);
    if item.is_ccp {
        parts.push("Marked as CCP");
    }
    if is_high_risk(item) {
        parts.push("High-risk ingredient");
    }
    if parts.is_empty() {
        return "Normal risk".to_string();
    }
    parts.join(" • ")
}

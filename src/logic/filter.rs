//! Search filtering over the pantry collection.

use crate::state::PantryItem;

/// Phrase that CCP-flagged items match against, so searching "ccp" or
/// "safety" surfaces every flagged item regardless of its name.
const CCP_SEARCH_PHRASE: &str = "ccp safety";

/// Whether `item` matches the lowercased search term `ql`.
fn matches_term(item: &PantryItem, ql: &str) -> bool {
    item.name.to_lowercase().contains(ql)
        || item.category.as_key().contains(ql)
        || item.allergens.to_lowercase().contains(ql)
        || (item.is_ccp && CCP_SEARCH_PHRASE.contains(ql))
}

/// Apply the search term to `items`, preserving their order.
///
/// Inputs:
/// - `items`: Collection slice in its current order
/// - `term`: Raw search input; trimmed and lowercased here
///
/// Output: Matching items, cloned, in the same relative order. An empty or
/// whitespace-only term returns the full input unchanged.
#[must_use]
pub fn filter_items(items: &[PantryItem], term: &str) -> Vec<PantryItem> {
    let ql = term.trim().to_lowercase();
    if ql.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|it| matches_term(it, &ql))
        .cloned()
        .collect()
}

//! Display-ready row view-models.
//!
//! The single entry point the UI uses: raw items + view state in, an ordered
//! sequence of fully derived rows out.

use chrono::NaiveDate;

use crate::logic::{filter_items, is_high_risk, safety_label, sort_items, status, suggest};
use crate::state::{PantryItem, SortMode};

/// Everything the table needs to render one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViewModel {
    /// The underlying record.
    pub item: PantryItem,
    /// Display label for the category column.
    pub category_label: &'static str,
    /// Display label for the storage column (may be empty).
    pub storage_label: &'static str,
    /// Safety column text.
    pub safety: String,
    /// Whether the high-risk badge applies.
    pub high_risk: bool,
    /// Suggestion column text.
    pub suggestion: &'static str,
    /// Composite status tags for row styling.
    pub status: status::RowStatus,
}

/// Build display rows from the collection and current view state.
///
/// Inputs:
/// - `items`: Full collection in insertion order
/// - `term`: Raw search input
/// - `mode`: Current sort mode
/// - `today`: Reference date for expiry classification
///
/// Output: Filtered, sorted rows with all derived fields computed. Nothing
/// is cached; heuristics run fresh on every call.
#[must_use]
pub fn build_rows(
    items: &[PantryItem],
    term: &str,
    mode: SortMode,
    today: NaiveDate,
) -> Vec<RowViewModel> {
    let mut visible = filter_items(items, term);
    sort_items(&mut visible, mode);
    visible
        .into_iter()
        .map(|item| RowViewModel {
            category_label: item.category.label(),
            storage_label: item.storage.label(),
            safety: safety_label(&item),
            high_risk: is_high_risk(&item),
            suggestion: suggest(&item),
            status: status::classify(&item, today),
            item,
        })
        .collect()
}

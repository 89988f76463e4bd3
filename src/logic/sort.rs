//! Ordering of the visible table.

use crate::state::{PantryItem, SortMode};
use crate::util::{expiry_or_far_future, parse_quantity};

/// Sort `items` in place according to `mode`.
///
/// Inputs:
/// - `items`: Filtered rows, mutated in place
/// - `mode`: Current sort mode; `Unsorted` leaves the order untouched
///
/// Output: Items reordered. All comparisons are total and stable, so sorting
/// twice yields the same result and name-descending is the exact reverse of
/// name-ascending for distinct names.
pub fn sort_items(items: &mut [PantryItem], mode: SortMode) {
    match mode {
        SortMode::Unsorted => {}
        SortMode::NameAsc => {
            items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortMode::NameDesc => {
            items.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortMode::Quantity => {
            items.sort_by(|a, b| {
                parse_quantity(&a.quantity).total_cmp(&parse_quantity(&b.quantity))
            });
        }
        SortMode::Expiry => {
            items.sort_by_key(|it| expiry_or_far_future(&it.expiry));
        }
    }
}

//! Integration tests for the view engine: filter, sort, heuristics, and the
//! composite row status, exercised together through `build_rows`.

use chrono::NaiveDate;
use larder::logic::{SlotTag, build_rows, filter_items, sort_items};
use larder::state::{Category, PantryItem, SortMode};

/// What: Fixed "today" so expiry classification is deterministic.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid date")
}

/// What: Build a pantry item with the fields the view engine reads.
///
/// Inputs:
/// - `name`, `category`, `quantity`, `expiry`: Field values
///
/// Output:
/// - `PantryItem` with a derived id and defaults elsewhere
fn item(name: &str, category: Category, quantity: &str, expiry: &str) -> PantryItem {
    PantryItem {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.into(),
        category,
        quantity: quantity.into(),
        expiry: expiry.into(),
        ..PantryItem::default()
    }
}

#[test]
/// What: Empty search term returns every row; sorting stays idempotent.
///
/// Inputs:
/// - Four items; term ""; each sort mode applied twice.
///
/// Output:
/// - All rows present; repeating a sort never changes the order.
fn empty_term_identity_and_sort_idempotence() {
    let items = vec![
        item("Cocoa", Category::Other, "3", ""),
        item("Almonds", Category::Other, "7", "2026-09-20"),
        item("Butter", Category::Other, "2", "2026-09-01"),
        item("Yeast", Category::Other, "0.5", ""),
    ];
    assert_eq!(filter_items(&items, "").len(), items.len());

    for mode in [
        SortMode::Unsorted,
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::Quantity,
        SortMode::Expiry,
    ] {
        let mut once = items.clone();
        sort_items(&mut once, mode);
        let mut twice = once.clone();
        sort_items(&mut twice, mode);
        assert_eq!(once, twice, "mode {mode:?}");
    }
}

#[test]
/// What: Name descending is the reverse of ascending for distinct names.
///
/// Inputs:
/// - Rows built with NameAsc and NameDesc over the same distinct names.
///
/// Output:
/// - The two orders are exact reverses.
fn name_desc_reverses_name_asc() {
    let items = vec![
        item("Walnuts", Category::Other, "4", ""),
        item("apricots", Category::Other, "4", ""),
        item("Brown sugar", Category::Sugar, "4", ""),
    ];
    let asc: Vec<String> = build_rows(&items, "", SortMode::NameAsc, today())
        .iter()
        .map(|r| r.item.name.clone())
        .collect();
    let mut desc: Vec<String> = build_rows(&items, "", SortMode::NameDesc, today())
        .iter()
        .map(|r| r.item.name.clone())
        .collect();
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
/// What: The full derived row for a CCP search hit.
///
/// Inputs:
/// - A CCP-flagged item among others; search term "safety".
///
/// Output:
/// - Only the CCP item matches; its row carries the badge flags, bulleted
///   safety text, category suggestion, and composite status classes.
fn ccp_search_yields_fully_derived_row() {
    let mut ganache = item("Chocolate ganache", Category::Filling, "1", "2026-08-29");
    ganache.is_ccp = true;
    let items = vec![
        ganache,
        item("Plain flour", Category::Flour, "20", ""),
    ];

    let rows = build_rows(&items, "safety", SortMode::Unsorted, today());
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row.item.is_ccp);
    assert!(row.high_risk);
    assert_eq!(row.safety, "Marked as CCP • High-risk ingredient");
    assert_eq!(
        row.suggestion,
        "Perfect for filling eclairs, tarts, or layered cakes."
    );
    // Quantity 1 overwrites the expired slot; safety flag is additive.
    assert_eq!(row.status.slot, Some(SlotTag::CriticalStock));
    assert_eq!(row.status.classes(), "critical-stock ccp-row");
}

#[test]
/// What: Category rules beat quantity rules in suggestions.
///
/// Inputs:
/// - Flour item with a bulk quantity of 10.
///
/// Output:
/// - The pastry-base suggestion, not the promo/bulk one.
fn suggestion_category_beats_quantity() {
    let items = vec![item("anything", Category::Flour, "10", "")];
    let rows = build_rows(&items, "", SortMode::Unsorted, today());
    assert_eq!(
        rows[0].suggestion,
        "Great for pastry bases: tarts, pies, croissants."
    );
}

#[test]
/// What: Status slot behavior across the documented edge cases.
///
/// Inputs:
/// - qty 1 without expiry; qty 10 expired yesterday; qty 2 expiring soon.
///
/// Output:
/// - critical-stock alone; expired alone; expiring-soon wins over low-stock.
fn status_slot_edge_cases() {
    let rows = build_rows(
        &[item("Vanilla pods", Category::Other, "1", "")],
        "",
        SortMode::Unsorted,
        today(),
    );
    let classes = rows[0].status.classes();
    assert!(classes.contains("critical-stock"));
    assert!(!classes.contains("low-stock"));
    assert!(!classes.contains("expired"));

    let rows = build_rows(
        &[item("Old milk", Category::Other, "10", "2026-08-29")],
        "",
        SortMode::Unsorted,
        today(),
    );
    assert_eq!(rows[0].status.slot, Some(SlotTag::Expired));

    let rows = build_rows(
        &[item("Soft cheese", Category::Other, "2", "2026-09-01")],
        "",
        SortMode::Unsorted,
        today(),
    );
    assert_eq!(rows[0].status.slot, Some(SlotTag::ExpiringSoon));
}

#[test]
/// What: Quantity sorting treats non-numeric quantities as zero.
///
/// Inputs:
/// - Quantities "2", "", "0.5", "lots".
///
/// Output:
/// - Zero-valued entries first in input order, then numeric ascending.
fn quantity_sort_non_numeric_as_zero() {
    let items = vec![
        item("A", Category::Other, "2", ""),
        item("B", Category::Other, "", ""),
        item("C", Category::Other, "0.5", ""),
        item("D", Category::Other, "lots", ""),
    ];
    let names: Vec<String> = build_rows(&items, "", SortMode::Quantity, today())
        .iter()
        .map(|r| r.item.name.clone())
        .collect();
    assert_eq!(names, ["B", "D", "C", "A"]);
}

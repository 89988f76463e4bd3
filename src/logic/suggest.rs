//! Usage suggestion heuristic.

use crate::state::{Category, PantryItem};
use crate::util::parse_quantity;

/// Pick a usage suggestion for `item`.
///
/// A fixed decision table evaluated top-down, first match wins: category
/// rules, then name rules, then quantity rules, then a generic fallback. The
/// ordering is a contract — category always beats name, name always beats
/// quantity — and every rule's text is fixed so renders are deterministic.
#[must_use]
pub fn suggest(item: &PantryItem) -> &'static str {
    match item.category {
        Category::Flour => return "Great for pastry bases: tarts, pies, croissants.",
        Category::Sugar => return "Use in syrups, meringues, or caramel for toppings.",
        Category::Filling => return "Perfect for filling eclairs, tarts, or layered cakes.",
        Category::Topping => return "Use as decoration on cupcakes, donuts, or slices.",
        Category::Frozen => return "Plan ahead: defrost and use in tomorrow’s specials.",
        Category::Other => {}
    }

    let name = item.name.to_lowercase();
    if name.contains("cream") {
        return "Turn this into whipped cream, mousse, or a soft filling.";
    }
    if name.contains("egg") {
        return "Use for custard, sponge cake, or brioche dough.";
    }
    if name.contains("strawberry") || name.contains("fruit") {
        return "Use in fruit tarts, compotes, or fresh garnish.";
    }

    let qty = parse_quantity(&item.quantity);
    if qty <= 1.0 {
        return "Use this soon in a small batch or daily special.";
    }
    if qty >= 5.0 {
        return "Consider a promo or bulk bake using this ingredient.";
    }

    "Think of one pastry today that uses this ingredient."
}

#[cfg(test)]
mod tests {
    use super::suggest;
    use crate::state::{Category, PantryItem};

    fn item(name: &str, category: Category, quantity: &str) -> PantryItem {
        PantryItem {
            name: name.into(),
            category,
            quantity: quantity.into(),
            ..PantryItem::default()
        }
    }

    #[test]
    /// What: Category rules outrank name and quantity rules
    ///
    /// - Input: Flour category with a "cream" name and bulk quantity
    /// - Output: The flour suggestion
    fn category_beats_name_and_quantity() {
        let it = item("cream of wheat", Category::Flour, "10");
        assert_eq!(suggest(&it), "Great for pastry bases: tarts, pies, croissants.");
    }

    #[test]
    /// What: Name rules outrank quantity rules
    ///
    /// - Input: "Egg whites" in Other with quantity 10
    /// - Output: The egg suggestion, not the bulk suggestion
    fn name_beats_quantity() {
        let it = item("Egg whites", Category::Other, "10");
        assert_eq!(suggest(&it), "Use for custard, sponge cake, or brioche dough.");
    }

    #[test]
    /// What: Each category maps to its fixed suggestion
    ///
    /// - Input: One item per non-Other category
    /// - Output: The category's fixed text
    fn category_table_is_fixed() {
        assert_eq!(
            suggest(&item("x", Category::Sugar, "1")),
            "Use in syrups, meringues, or caramel for toppings."
        );
        assert_eq!(
            suggest(&item("x", Category::Filling, "1")),
            "Perfect for filling eclairs, tarts, or layered cakes."
        );
        assert_eq!(
            suggest(&item("x", Category::Topping, "1")),
            "Use as decoration on cupcakes, donuts, or slices."
        );
        assert_eq!(
            suggest(&item("x", Category::Frozen, "1")),
            "Plan ahead: defrost and use in tomorrow’s specials."
        );
    }

    #[test]
    /// What: Quantity thresholds and the generic fallback
    ///
    /// - Input: Other-category items with qty 1, 5, 3, and empty
    /// - Output: Small-batch at ≤1 (empty counts as 0), promo at ≥5,
    ///   generic fallback in between
    fn quantity_rules_and_fallback() {
        assert_eq!(
            suggest(&item("Vanilla", Category::Other, "1")),
            "Use this soon in a small batch or daily special."
        );
        assert_eq!(
            suggest(&item("Vanilla", Category::Other, "")),
            "Use this soon in a small batch or daily special."
        );
        assert_eq!(
            suggest(&item("Vanilla", Category::Other, "5")),
            "Consider a promo or bulk bake using this ingredient."
        );
        assert_eq!(
            suggest(&item("Vanilla", Category::Other, "3")),
            "Think of one pastry today that uses this ingredient."
        );
    }

    #[test]
    /// What: Fruit name rule covers both trigger words
    ///
    /// - Input: "Strawberry puree" and "Dried fruit mix"
    /// - Output: The fruit suggestion for both
    fn fruit_rule_both_words() {
        for name in ["Strawberry puree", "Dried fruit mix"] {
            assert_eq!(
                suggest(&item(name, Category::Other, "2")),
                "Use in fruit tarts, compotes, or fresh garnish."
            );
        }
    }
}

//! Item filtering: category, free-text and column predicates.
//!
//! All predicates are conjunctive and the output keeps the input order.

use crate::document::Item;

/// Normalized filter criteria.
///
/// Build it through [`ItemFilter::new`] so that category and query are trimmed
/// (and the query lowercased) exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    category: Option<String>,
    query: Option<String>,
    column: Option<i64>,
}

impl ItemFilter {
    pub fn new(category: Option<&str>, query: Option<&str>, column: Option<i64>) -> Self {
        Self {
            category: category.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string),
            query: normalize_query(query),
            column,
        }
    }

    /// Filter that lets every item through.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn column(&self) -> Option<i64> {
        self.column
    }

    pub fn is_identity(&self) -> bool {
        self.category.is_none() && self.query.is_none() && self.column.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = &self.category {
            if item.category.trim() != category {
                return false;
            }
        }
        if let Some(query) = &self.query {
            if !haystack(item).contains(query.as_str()) {
                return false;
            }
        }
        match self.column {
            Some(col) => item.x == col,
            None => true,
        }
    }

    /// Stable filter over `items`.
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|it| self.matches(it)).cloned().collect()
    }
}

/// Text-only search used by the dedicated search endpoint.
///
/// Category and column criteria are deliberately not part of this path.
pub fn search(items: &[Item], query: &str) -> Vec<Item> {
    ItemFilter::new(None, Some(query), None).apply(items)
}

fn normalize_query(query: Option<&str>) -> Option<String> {
    query.map(str::trim).filter(|q| !q.is_empty()).map(str::to_lowercase)
}

/// Lowercased `name category sku description`, joined by single spaces.
///
/// Matching runs on the joined string, so a query may span two adjacent fields.
fn haystack(item: &Item) -> String {
    [
        item.name.as_str(),
        item.category.as_str(),
        item.sku.as_str(),
        item.description.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(sku: &str, name: &str, category: &str, x: i64) -> Item {
        Item {
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            x,
            y: 0,
            qty: 0,
            aisle: None,
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            item("FX-001", "Hex Bolt M8", "Fasteners", 1),
            item("TL-002", "Torque Wrench", "Tools", 2),
            item("FX-003", "Wood Screw", "Fasteners", 2),
            item("EL-004", "Cable Tie", " Electrical ", 3),
        ]
    }

    fn skus(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.sku.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let items = catalog();
        let f = ItemFilter::new(Some("  "), Some(""), None);
        assert!(f.is_identity());
        assert_eq!(f.apply(&items), items);
    }

    #[test]
    fn category_match_is_exact_after_trimming() {
        let items = catalog();
        assert_eq!(skus(&ItemFilter::new(Some(" Fasteners"), None, None).apply(&items)), ["FX-001", "FX-003"]);
        assert_eq!(skus(&ItemFilter::new(Some("Electrical"), None, None).apply(&items)), ["EL-004"]);
        assert!(ItemFilter::new(Some("fasteners"), None, None).apply(&items).is_empty());
    }

    #[test]
    fn query_is_case_insensitive_over_all_text_fields() {
        let mut items = catalog();
        items[1].description = "Calibrated 1/2in DRIVE".to_string();

        assert_eq!(skus(&ItemFilter::new(None, Some("  BOLT "), None).apply(&items)), ["FX-001"]);
        assert_eq!(skus(&ItemFilter::new(None, Some("drive"), None).apply(&items)), ["TL-002"]);
        assert_eq!(skus(&ItemFilter::new(None, Some("fx-"), None).apply(&items)), ["FX-001", "FX-003"]);
        assert_eq!(skus(&ItemFilter::new(None, Some("tools"), None).apply(&items)), ["TL-002"]);
    }

    #[test]
    fn query_can_span_adjacent_fields() {
        let items = catalog();
        assert_eq!(skus(&ItemFilter::new(None, Some("wrench tools"), None).apply(&items)), ["TL-002"]);
    }

    #[test]
    fn column_filter_keeps_items_in_that_column() {
        let items = catalog();
        assert_eq!(skus(&ItemFilter::new(None, None, Some(2)).apply(&items)), ["TL-002", "FX-003"]);
        assert_eq!(
            skus(&ItemFilter::new(Some("Fasteners"), None, Some(2)).apply(&items)),
            ["FX-003"]
        );
        assert!(ItemFilter::new(None, None, Some(9)).apply(&items).is_empty());
    }

    #[test]
    fn search_without_match_returns_empty_list() {
        assert!(search(&catalog(), "parafuso").is_empty());
    }

    #[test]
    fn search_with_blank_query_returns_everything() {
        let items = catalog();
        assert_eq!(search(&items, "   "), items);
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            "[A-Z]{2}-[0-9]{3}",
            "[a-zA-Z ]{0,12}",
            prop::sample::select(vec!["Tools", "Fasteners", "Electrical", ""]),
            "[a-z ]{0,12}",
            0i64..6,
        )
            .prop_map(|(sku, name, category, description, x)| Item {
                sku,
                name,
                category: category.to_string(),
                description,
                x,
                y: 0,
                qty: 0,
                aisle: None,
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: category and text filters compose conjunctively.
        #[test]
        fn combined_filter_equals_sequential_filters(
            items in prop::collection::vec(arb_item(), 0..20),
            category in prop::sample::select(vec!["Tools", "Fasteners", "Electrical", ""]),
            query in "[a-z]{0,3}",
        ) {
            let combined = ItemFilter::new(Some(category), Some(query.as_str()), None).apply(&items);
            let by_category = ItemFilter::new(Some(category), None, None).apply(&items);
            let sequential = ItemFilter::new(None, Some(query.as_str()), None).apply(&by_category);
            prop_assert_eq!(combined, sequential);
        }

        /// Property: the filter is stable (output is a subsequence of the input).
        #[test]
        fn filter_preserves_relative_order(
            items in prop::collection::vec(arb_item(), 0..20),
            column in 0i64..6,
        ) {
            let out = ItemFilter::new(None, None, Some(column)).apply(&items);
            let mut rest = items.iter();
            for kept in &out {
                prop_assert!(rest.any(|it| it == kept));
            }
        }
    }
}

use serde::Serialize;

use crate::document::{Item, Zone};

/// Aisle name shown for items that neither declare an aisle nor sit in a zone.
pub const FALLBACK_AISLE: &str = "Corredor";

/// Display aisle for `item`.
///
/// The explicit `aisle` field wins; otherwise the label of the first zone (in
/// list order) containing the item's cell; otherwise [`FALLBACK_AISLE`]. A
/// containing zone without a label also resolves to [`FALLBACK_AISLE`].
pub fn resolve_aisle<'a>(item: &'a Item, zones: &'a [Zone]) -> &'a str {
    if let Some(aisle) = item.explicit_aisle() {
        return aisle;
    }
    zones
        .iter()
        .find(|z| z.contains(item.x, item.y))
        .map(|z| z.label.as_deref().unwrap_or(FALLBACK_AISLE))
        .unwrap_or(FALLBACK_AISLE)
}

/// An item annotated with its resolved aisle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedItem {
    #[serde(flatten)]
    pub item: Item,
    pub aisle_display: String,
}

/// Annotates each item with its display aisle, keeping input order.
pub fn annotate(items: Vec<Item>, zones: &[Zone]) -> Vec<ResolvedItem> {
    items
        .into_iter()
        .map(|item| {
            let aisle_display = resolve_aisle(&item, zones).to_string();
            ResolvedItem { item, aisle_display }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn zone(x: i64, y: i64, w: i64, h: i64, label: &str) -> Zone {
        Zone {
            x,
            y,
            w,
            h,
            label: Some(label.to_string()),
            fill: "#cbd5e1".to_string(),
            emoji: String::new(),
        }
    }

    fn item_at(x: i64, y: i64, aisle: Option<&str>) -> Item {
        Item {
            sku: "SKU".to_string(),
            name: String::new(),
            category: String::new(),
            description: String::new(),
            x,
            y,
            qty: 0,
            aisle: aisle.map(str::to_string),
        }
    }

    #[test]
    fn explicit_aisle_wins_over_containing_zone() {
        let zones = vec![zone(9, 0, 1, 8, "C9")];
        let item = item_at(9, 5, Some("C10"));
        assert_eq!(resolve_aisle(&item, &zones), "C10");
    }

    #[test]
    fn first_matching_zone_wins_on_overlap() {
        let zones = vec![zone(0, 0, 3, 3, "A"), zone(1, 1, 3, 3, "B")];
        assert_eq!(resolve_aisle(&item_at(2, 2, None), &zones), "A");
        assert_eq!(resolve_aisle(&item_at(3, 3, None), &zones), "B");
    }

    #[test]
    fn empty_explicit_aisle_falls_back_to_zones() {
        let zones = vec![zone(0, 0, 2, 2, "A")];
        assert_eq!(resolve_aisle(&item_at(1, 1, Some("")), &zones), "A");
    }

    #[test]
    fn uncovered_or_unplaced_items_get_fallback() {
        let zones = vec![zone(0, 0, 2, 2, "A")];
        assert_eq!(resolve_aisle(&item_at(2, 0, None), &zones), FALLBACK_AISLE);
        assert_eq!(resolve_aisle(&item_at(-1, -1, None), &zones), FALLBACK_AISLE);
        assert_eq!(resolve_aisle(&item_at(0, 0, None), &[]), FALLBACK_AISLE);
    }

    #[test]
    fn unlabelled_zone_resolves_to_fallback() {
        let mut unlabelled = zone(0, 0, 3, 3, "");
        unlabelled.label = None;
        let zones = vec![unlabelled, zone(0, 0, 5, 5, "B")];

        // The first containing zone decides, even without a label.
        assert_eq!(resolve_aisle(&item_at(1, 1, None), &zones), FALLBACK_AISLE);
        assert_eq!(resolve_aisle(&item_at(4, 4, None), &zones), "B");
    }

    #[test]
    fn empty_zone_label_is_kept() {
        let zones = vec![zone(0, 0, 3, 3, "")];
        assert_eq!(resolve_aisle(&item_at(1, 1, None), &zones), "");
    }

    #[test]
    fn annotate_keeps_order_and_sets_display() {
        let zones = vec![zone(0, 0, 1, 1, "A")];
        let out = annotate(vec![item_at(0, 0, None), item_at(5, 5, Some("Z"))], &zones);
        let names: Vec<&str> = out.iter().map(|r| r.aisle_display.as_str()).collect();
        assert_eq!(names, ["A", "Z"]);
    }

    #[test]
    fn resolved_item_serializes_flat() {
        let out = annotate(vec![item_at(0, 0, None)], &[]);
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(json["sku"], "SKU");
        assert_eq!(json["aisle_display"], FALLBACK_AISLE);
    }

    fn arb_zone() -> impl Strategy<Value = Zone> {
        (0i64..8, 0i64..8, 1i64..4, 1i64..4, "[A-D][0-9]")
            .prop_map(|(x, y, w, h, label)| zone(x, y, w, h, &label))
    }

    proptest! {
        /// Property: a non-empty explicit aisle is returned verbatim.
        #[test]
        fn explicit_aisle_always_returned(
            zones in prop::collection::vec(arb_zone(), 0..6),
            x in 0i64..10,
            y in 0i64..10,
            aisle in "[A-Z][0-9]{1,2}",
        ) {
            let item = item_at(x, y, Some(aisle.as_str()));
            prop_assert_eq!(resolve_aisle(&item, &zones), aisle.as_str());
        }

        /// Property: without an override, the first containing zone (or the fallback) is used.
        #[test]
        fn inferred_aisle_is_first_containing_zone(
            zones in prop::collection::vec(arb_zone(), 0..6),
            x in 0i64..10,
            y in 0i64..10,
        ) {
            let item = item_at(x, y, None);
            let expected = zones
                .iter()
                .find(|z| z.x <= x && x < z.x + z.w && z.y <= y && y < z.y + z.h)
                .and_then(|z| z.label.clone())
                .unwrap_or_else(|| FALLBACK_AISLE.to_string());
            prop_assert_eq!(resolve_aisle(&item, &zones), expected.as_str());
        }
    }
}

//! Tests for segment classification and parsing.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

use facetpath::*;

fn registry() -> FacetRegistry {
    FacetRegistry::from_slugs(["color", "size", "memory"])
}

#[test]
fn test_full_phone_listing() {
    let registry = FacetRegistry::from_slugs(["color"]);
    let parsed = parse_segments(
        &[
            "phones",
            "brand-samsung-apple",
            "color-black-white",
            "price-1000-5000",
            "in-stock",
            "sort-price_asc",
        ],
        &registry,
    );

    let mut attribute_filters = BTreeMap::new();
    attribute_filters.insert(
        "color".to_string(),
        vec!["black".to_string(), "white".to_string()],
    );
    let expected = ParsedPath {
        category_path: CategoryPath::from_segments(["phones"]),
        filters: FilterState {
            brand_slugs: vec!["samsung".to_string(), "apple".to_string()],
            attribute_filters,
            price_min: Some(1000),
            price_max: Some(5000),
            in_stock: true,
            sort_by: Some("price_asc".to_string()),
            ..FilterState::default()
        },
    };

    assert_eq!(parsed, expected);
}

#[test]
fn test_filter_zone_never_returns_to_categories() {
    let parsed = parse_segments(&["laptops", "brand-apple", "monitors"], &registry());

    assert_eq!(parsed.category_path, CategoryPath::from_segments(["laptops"]));
    assert_eq!(parsed.filters.brand_slugs, vec!["apple"]);
}

#[test]
fn test_registered_attribute_is_never_a_category() {
    let registry = FacetRegistry::from_slugs(["color"]);
    let parsed = parse_segments(&["color-black"], &registry);

    assert!(parsed.category_path.is_empty());
    assert_eq!(parsed.filters.attribute_filters["color"], vec!["black"]);
}

#[test]
fn test_filter_segment_order_does_not_matter() {
    let registry = registry();
    let forward = parse_segments(&["tv", "brand-a-b", "price-10-20"], &registry);
    let backward = parse_segments(&["tv", "price-10-20", "brand-a-b"], &registry);

    assert_eq!(forward, backward);
}

#[test]
fn test_many_filters_in_any_order() {
    let registry = registry();
    let segments = [
        "ucinka",
        "memory-128-256",
        "akcii",
        "sort-rating",
        "color-red",
        "in-stock",
    ];
    let mut reversed = segments;
    reversed.reverse();

    let a = parse_segments(&segments, &registry);
    let b = parse_segments(&reversed, &registry);
    assert_eq!(a, b);
    assert!(a.filters.is_clearance && a.filters.has_discount && a.filters.in_stock);
    assert_eq!(a.filters.attribute_filters.len(), 2);
}

#[test]
fn test_nested_category_path() {
    let parsed = parse_segments(
        &["electronics", "computers", "laptops", "size-15"],
        &registry(),
    );

    assert_eq!(
        parsed.category_path.segments(),
        ["electronics", "computers", "laptops"]
    );
    assert_eq!(parsed.category_path.leaf(), Some("laptops"));
}

#[test]
fn test_unrecognized_filter_segments_dropped() {
    let parsed = parse_segments(
        &["tv", "in-stock", "screen-55", "color-black", "garbage"],
        &registry(),
    );

    assert_eq!(parsed.category_path.segments(), ["tv"]);
    assert!(parsed.filters.in_stock);
    assert_eq!(parsed.filters.attribute_filters.len(), 1);
    assert_eq!(parsed.filters.attribute_filters["color"], vec!["black"]);
}

#[test]
fn test_removed_attribute_degrades_gracefully() {
    // Link generated while "memory" was a facet, parsed after it was removed
    let old_registry = registry();
    let new_registry = FacetRegistry::from_slugs(["color", "size"]);
    let segments = ["phones", "brand-apple", "memory-256", "color-red"];

    let before = parse_segments(&segments, &old_registry);
    let after = parse_segments(&segments, &new_registry);

    assert!(before.filters.attribute_filters.contains_key("memory"));
    assert!(!after.filters.attribute_filters.contains_key("memory"));
    assert_eq!(after.filters.brand_slugs, vec!["apple"]);
    assert_eq!(after.filters.attribute_filters["color"], vec!["red"]);
}

#[test]
fn test_attribute_removed_before_filter_zone_becomes_category() {
    // Without the registry entry the leading segment no longer opens the filter run
    let segments = ["memory-256", "brand-apple"];
    let parsed = parse_segments(&segments, &FacetRegistry::from_slugs(["color"]));

    assert_eq!(parsed.category_path.segments(), ["memory-256"]);
    assert_eq!(parsed.filters.brand_slugs, vec!["apple"]);
}

#[test]
fn test_non_numeric_price_is_absent() {
    let parsed = parse_segments(&["price-cheap-expensive"], &registry());

    assert_eq!(parsed.filters.price_min, None);
    assert_eq!(parsed.filters.price_max, None);
    assert!(!parsed.filters.has_active_filters());
}

#[test]
fn test_empty_value_lists_are_absent() {
    let parsed = parse_segments(&["brand-", "color-", "size-m"], &registry());

    assert!(parsed.filters.brand_slugs.is_empty());
    assert!(!parsed.filters.attribute_filters.contains_key("color"));
    assert_eq!(parsed.filters.active_filter_count(), 1);
}

#[test]
fn test_reserved_prefix_beats_registry() {
    // A facet registered as "sort" cannot shadow the sort segment
    let registry = FacetRegistry::from_slugs(["sort", "brand"]);
    let parsed = parse_segments(&["sort-new", "brand-lg"], &registry);

    assert_eq!(parsed.filters.sort_by.as_deref(), Some("new"));
    assert_eq!(parsed.filters.brand_slugs, vec!["lg"]);
    assert!(parsed.filters.attribute_filters.is_empty());
}

#[test]
fn test_classify_matches_parse_boundary() {
    let registry = registry();
    let segments = ["clothes", "shirts", "size-m", "akcii"];
    let boundary = segments
        .iter()
        .position(|s| classify(s, &registry).is_filter())
        .unwrap();

    let parsed = parse_segments(&segments, &registry);
    assert_eq!(parsed.category_path.len(), boundary);
}

//! Round-trip and stability properties of the canonical form.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

use facetpath::*;

fn registry() -> FacetRegistry {
    FacetRegistry::from_slugs(["color", "size", "memory"])
}

fn attrs(pairs: Vec<(&str, Vec<&str>)>) -> BTreeMap<String, Vec<String>> {
    pairs
        .into_iter()
        .map(|(slug, values)| {
            (
                slug.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

/// Hand-picked states covering every field alone and in combination.
fn sample_cases() -> Vec<(CategoryPath, FilterState)> {
    vec![
        (CategoryPath::new(), FilterState::default()),
        (
            CategoryPath::from_segments(["phones"]),
            FilterState::default(),
        ),
        (
            CategoryPath::from_segments(["electronics", "phones", "smartphones"]),
            FilterState {
                brand_slugs: vec!["xiaomi".into(), "apple".into(), "samsung".into()],
                ..FilterState::default()
            },
        ),
        (
            CategoryPath::from_segments(["clothes"]),
            FilterState {
                attribute_filters: attrs(vec![("size", vec!["xl", "m", "s"]), ("color", vec!["red"])]),
                ..FilterState::default()
            },
        ),
        (
            CategoryPath::new(),
            FilterState {
                price_min: Some(0),
                ..FilterState::default()
            },
        ),
        (
            CategoryPath::from_segments(["tv"]),
            FilterState {
                price_max: Some(99_999),
                has_discount: true,
                ..FilterState::default()
            },
        ),
        (
            CategoryPath::from_segments(["laptops"]),
            FilterState {
                brand_slugs: vec!["lenovo".into()],
                attribute_filters: attrs(vec![("memory", vec!["32", "16"])]),
                price_min: Some(20_000),
                price_max: Some(150_000),
                in_stock: true,
                has_discount: true,
                is_clearance: true,
                sort_by: Some("price-desc".into()),
            },
        ),
        (
            CategoryPath::new(),
            FilterState {
                sort_by: Some("popular".into()),
                ..FilterState::default()
            },
        ),
    ]
}

#[test]
fn test_parse_of_serialize_is_canonical_state() {
    let registry = registry();

    for (category, filters) in sample_cases() {
        let segments = serialize_segments(&category, &filters);
        let parsed = parse_segments(&segments, &registry);

        assert_eq!(parsed.category_path, category, "category for {:?}", segments);
        assert_eq!(parsed.filters, filters.canonicalize(), "filters for {:?}", segments);
    }
}

#[test]
fn test_serialize_is_idempotent() {
    let registry = registry();

    for (category, filters) in sample_cases() {
        let first = serialize_path("/catalog", &category, &filters);
        let segments = path_segments(&first, "/catalog").unwrap();
        let parsed = parse_segments(&segments, &registry);
        let second = serialize_path("/catalog", &parsed.category_path, &parsed.filters);

        assert_eq!(first, second);
    }
}

#[test]
fn test_equivalent_states_share_path() {
    let category = CategoryPath::from_segments(["clothes"]);
    let a = FilterState {
        brand_slugs: vec!["zara".into(), "mango".into()],
        attribute_filters: attrs(vec![("size", vec!["s", "m"]), ("color", vec!["red", "blue"])]),
        ..FilterState::default()
    };
    let b = FilterState {
        brand_slugs: vec!["mango".into(), "zara".into(), "zara".into()],
        attribute_filters: attrs(vec![("color", vec!["blue", "red"]), ("size", vec!["m", "s"])]),
        ..FilterState::default()
    };

    assert!(a.is_equivalent(&b));
    assert_eq!(
        serialize_path("/catalog", &category, &a),
        serialize_path("/catalog", &category, &b)
    );
    assert_eq!(cache_key(&category, &a), cache_key(&category, &b));
}

#[test]
fn test_update_then_roundtrip_is_stable() {
    let registry = registry();
    let url_segments = ["phones", "color-white", "brand-samsung", "in-stock"];
    let parsed = parse_segments(&url_segments, &registry);

    let updated = update_filters(
        &parsed.filters,
        FilterUpdate {
            brand_slugs: Some(vec!["samsung".into(), "apple".into()]),
            in_stock: Some(false),
            price_max: Some(30_000),
            ..FilterUpdate::default()
        },
    );

    let segments = serialize_segments(&parsed.category_path, &updated);
    assert_eq!(
        segments,
        vec!["phones", "brand-apple-samsung", "color-white", "price--30000"]
    );

    let reparsed = parse_segments(&segments, &registry);
    assert_eq!(reparsed.filters, updated.canonicalize());
    assert_eq!(serialize_segments(&reparsed.category_path, &reparsed.filters), segments);
}

#[test]
fn test_clearing_last_filter_returns_to_category() {
    let current = FilterState {
        in_stock: true,
        ..FilterState::default()
    };
    let cleared = update_filters(
        &current,
        FilterUpdate {
            in_stock: Some(false),
            ..FilterUpdate::default()
        },
    );

    assert_eq!(cleared, FilterState::default());
    assert!(!has_active_filters(&cleared));
    assert_eq!(
        serialize_path("/catalog", &CategoryPath::from_segments(["tv"]), &cleared),
        "/catalog/tv"
    );
}

#[test]
fn test_api_params_roundtrip_in_meaning() {
    for (category, filters) in sample_cases() {
        let params = to_api_params(category.leaf(), &filters, 3, 48);
        let query = from_api_params(&params).unwrap();

        assert_eq!(query.category_slug.as_deref(), category.leaf());
        assert_eq!(query.filters, filters.canonicalize());
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 48);
    }
}

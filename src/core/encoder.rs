//! Canonical path serialization.
//!
//! Segments are always emitted in one fixed order, with every multi-value
//! field sorted, so that filter states selecting the same content produce
//! byte-identical paths.

use crate::types::{CategoryPath, FilterSegment, FilterState};
use crate::url::utils::join_route;

/// Build the canonical filter segments for a filter state.
///
/// Order: brands, attributes (ascending by slug), price range, in-stock,
/// discount, clearance, sort. Empty brand and attribute lists produce no
/// segment.
pub fn canonical_segments(filters: &FilterState) -> Vec<FilterSegment> {
    let FilterState {
        brand_slugs,
        attribute_filters,
        price_min,
        price_max,
        in_stock,
        has_discount,
        is_clearance,
        sort_by,
    } = filters.canonicalize();

    let mut segments = Vec::new();

    if !brand_slugs.is_empty() {
        segments.push(FilterSegment::Brand(brand_slugs));
    }

    // BTreeMap iteration is already ascending by slug
    for (slug, values) in attribute_filters {
        segments.push(FilterSegment::Attribute { slug, values });
    }

    if price_min.is_some() || price_max.is_some() {
        segments.push(FilterSegment::Price {
            min: price_min,
            max: price_max,
        });
    }

    if in_stock {
        segments.push(FilterSegment::InStock);
    }
    if has_discount {
        segments.push(FilterSegment::Discount);
    }
    if is_clearance {
        segments.push(FilterSegment::Clearance);
    }
    if let Some(token) = sort_by {
        segments.push(FilterSegment::Sort(token));
    }

    segments
}

/// Serialize a category path and filters into canonical path segments.
///
/// # Examples
///
/// ```
/// use facetpath::{serialize_segments, CategoryPath, FilterState};
///
/// let filters = FilterState {
///     brand_slugs: vec!["samsung".into(), "apple".into()],
///     price_min: Some(1000),
///     in_stock: true,
///     ..FilterState::default()
/// };
/// let segments = serialize_segments(&CategoryPath::from_segments(["phones"]), &filters);
///
/// assert_eq!(segments, vec!["phones", "brand-apple-samsung", "price-1000-", "in-stock"]);
/// ```
pub fn serialize_segments(category_path: &CategoryPath, filters: &FilterState) -> Vec<String> {
    category_path
        .segments()
        .iter()
        .cloned()
        .chain(canonical_segments(filters).iter().map(ToString::to_string))
        .collect()
}

/// Serialize a category path and filters into a canonical path under a route
/// prefix.
///
/// # Examples
///
/// ```
/// use facetpath::{serialize_path, CategoryPath, FilterState};
///
/// let mut filters = FilterState::default();
/// filters.toggle_attribute_value("color", "white");
/// filters.toggle_attribute_value("color", "black");
///
/// let path = serialize_path("/catalog", &CategoryPath::from_segments(["phones"]), &filters);
/// assert_eq!(path, "/catalog/phones/color-black-white");
///
/// let root = serialize_path("/catalog", &CategoryPath::new(), &FilterState::default());
/// assert_eq!(root, "/catalog");
/// ```
pub fn serialize_path(route_prefix: &str, category_path: &CategoryPath, filters: &FilterState) -> String {
    join_route(route_prefix, &serialize_segments(category_path, filters))
}

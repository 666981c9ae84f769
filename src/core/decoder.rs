//! Path segment decoding.
//!
//! Splits a segment list into a category prefix and a filter suffix, and
//! decodes each filter segment into a typed [`FilterSegment`]. Decoding is
//! permissive: segments that match no filter form are dropped, and price
//! components that are not integers are treated as unset.

use tracing::debug;

use crate::core::classifier::{
    attribute_prefix, classify, BRAND_PREFIX, CLEARANCE_TOKEN, DISCOUNT_TOKEN, IN_STOCK_TOKEN,
    PRICE_PREFIX, SORT_PREFIX,
};
use crate::types::{CategoryPath, FacetRegistry, FilterSegment, FilterState, ParsedPath};

/// Split a hyphen-joined value list, skipping empty pieces.
fn split_values(rest: &str) -> Vec<String> {
    rest.split('-')
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_price_bound(raw: Option<&str>, segment: &str) -> Option<u64> {
    let raw = raw.filter(|s| !s.is_empty())?;
    match raw.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(segment, component = raw, "ignoring non-numeric price bound");
            None
        }
    }
}

/// Decode a single filter segment.
///
/// Returns `None` for a segment that matches no filter form.
///
/// # Examples
///
/// ```
/// use facetpath::{decode_filter_segment, FacetRegistry, FilterSegment};
///
/// let registry = FacetRegistry::from_slugs(["color"]);
///
/// assert_eq!(
///     decode_filter_segment("price-1000-", &registry),
///     Some(FilterSegment::Price { min: Some(1000), max: None })
/// );
/// assert_eq!(
///     decode_filter_segment("color-black-white", &registry),
///     Some(FilterSegment::Attribute {
///         slug: "color".to_string(),
///         values: vec!["black".to_string(), "white".to_string()],
///     })
/// );
/// assert_eq!(decode_filter_segment("monitors", &registry), None);
/// ```
pub fn decode_filter_segment(segment: &str, registry: &FacetRegistry) -> Option<FilterSegment> {
    match segment {
        IN_STOCK_TOKEN => return Some(FilterSegment::InStock),
        DISCOUNT_TOKEN => return Some(FilterSegment::Discount),
        CLEARANCE_TOKEN => return Some(FilterSegment::Clearance),
        _ => {}
    }

    if let Some(rest) = segment.strip_prefix(BRAND_PREFIX) {
        return Some(FilterSegment::Brand(split_values(rest)));
    }

    if let Some(rest) = segment.strip_prefix(PRICE_PREFIX) {
        let mut bounds = rest.split('-');
        let min = parse_price_bound(bounds.next(), segment);
        let max = parse_price_bound(bounds.next(), segment);
        return Some(FilterSegment::Price { min, max });
    }

    if let Some(token) = segment.strip_prefix(SORT_PREFIX) {
        return Some(FilterSegment::Sort(token.to_string()));
    }

    if let Some((slug, rest)) = attribute_prefix(segment, registry) {
        return Some(FilterSegment::Attribute {
            slug: slug.to_string(),
            values: split_values(rest),
        });
    }

    None
}

/// Merge a decoded segment into a filter state.
///
/// A segment for a field that is already set replaces the previous value.
/// An empty brand or attribute list leaves that field absent.
pub fn apply_segment(filters: &mut FilterState, segment: FilterSegment) {
    match segment {
        FilterSegment::Brand(slugs) => filters.brand_slugs = slugs,
        FilterSegment::Attribute { slug, values } => {
            if values.is_empty() {
                filters.attribute_filters.remove(&slug);
            } else {
                filters.attribute_filters.insert(slug, values);
            }
        }
        FilterSegment::Price { min, max } => {
            filters.price_min = min;
            filters.price_max = max;
        }
        FilterSegment::InStock => filters.in_stock = true,
        FilterSegment::Discount => filters.has_discount = true,
        FilterSegment::Clearance => filters.is_clearance = true,
        FilterSegment::Sort(token) => {
            filters.sort_by = if token.is_empty() { None } else { Some(token) };
        }
    }
}

/// Parse an ordered segment list into a category path and filters.
///
/// Segments are read left to right. Leading category segments form the
/// category path; the first filter segment opens the filter run, and every
/// segment after it is decoded as a filter even if it looks like a category.
/// Segments in the filter run that decode to nothing are dropped.
///
/// # Examples
///
/// ```
/// use facetpath::{parse_segments, FacetRegistry};
///
/// let registry = FacetRegistry::from_slugs(["color"]);
/// let parsed = parse_segments(
///     &["phones", "brand-samsung-apple", "color-black", "in-stock"],
///     &registry,
/// );
///
/// assert_eq!(parsed.category_path.segments(), ["phones"]);
/// assert_eq!(parsed.filters.brand_slugs, vec!["samsung", "apple"]);
/// assert_eq!(parsed.filters.attribute_filters["color"], vec!["black"]);
/// assert!(parsed.filters.in_stock);
/// ```
pub fn parse_segments<S: AsRef<str>>(segments: &[S], registry: &FacetRegistry) -> ParsedPath {
    let mut category_path = CategoryPath::new();
    let mut filters = FilterState::default();
    let mut in_filter_zone = false;

    for segment in segments.iter().map(|s| s.as_ref()) {
        if !in_filter_zone && !classify(segment, registry).is_filter() {
            category_path.push(segment);
            continue;
        }

        in_filter_zone = true;
        match decode_filter_segment(segment, registry) {
            Some(decoded) => apply_segment(&mut filters, decoded),
            None => debug!(segment, "dropping unrecognized filter segment"),
        }
    }

    ParsedPath {
        category_path,
        filters,
    }
}

//! Segment classification: category slug or start of the filter run.

use tracing::trace;

use crate::types::{FacetRegistry, SegmentClass};

/// Prefix of the brand filter segment.
pub const BRAND_PREFIX: &str = "brand-";
/// Prefix of the price range segment.
pub const PRICE_PREFIX: &str = "price-";
/// Prefix of the sort-order segment.
pub const SORT_PREFIX: &str = "sort-";
/// In-stock flag segment.
pub const IN_STOCK_TOKEN: &str = "in-stock";
/// Discount flag segment.
pub const DISCOUNT_TOKEN: &str = "akcii";
/// Clearance flag segment.
pub const CLEARANCE_TOKEN: &str = "ucinka";

/// Check if the segment is one of the reserved filter forms.
///
/// Reserved forms win over attribute slugs: a registry entry named `brand`,
/// `price` or `sort` can never produce an attribute segment.
pub fn is_reserved(segment: &str) -> bool {
    segment == IN_STOCK_TOKEN
        || segment == DISCOUNT_TOKEN
        || segment == CLEARANCE_TOKEN
        || segment.starts_with(BRAND_PREFIX)
        || segment.starts_with(PRICE_PREFIX)
        || segment.starts_with(SORT_PREFIX)
}

/// Split a segment at its first hyphen and return the attribute slug if it is
/// registered.
pub(crate) fn attribute_prefix<'a>(segment: &'a str, registry: &FacetRegistry) -> Option<(&'a str, &'a str)> {
    let (prefix, rest) = segment.split_once('-')?;
    registry.contains(prefix).then_some((prefix, rest))
}

/// Classify a single path segment.
///
/// Rules, first match wins:
/// 1. reserved filter tokens and prefixes
/// 2. `<attribute>-...` where `<attribute>` is in the registry
/// 3. anything else is a category slug
///
/// # Examples
///
/// ```
/// use facetpath::{classify, FacetRegistry, SegmentClass};
///
/// let registry = FacetRegistry::from_slugs(["color"]);
/// assert_eq!(classify("color-black", &registry), SegmentClass::Filter);
/// assert_eq!(classify("in-stock", &registry), SegmentClass::Filter);
/// assert_eq!(classify("laptops", &registry), SegmentClass::Category);
/// ```
pub fn classify(segment: &str, registry: &FacetRegistry) -> SegmentClass {
    let class = if is_reserved(segment) || attribute_prefix(segment, registry).is_some() {
        SegmentClass::Filter
    } else {
        SegmentClass::Category
    };
    trace!(segment, ?class, "classified path segment");
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FacetRegistry {
        FacetRegistry::from_slugs(["color", "size"])
    }

    #[test]
    fn test_reserved_tokens() {
        let registry = registry();
        for segment in [
            "brand-apple",
            "price-10-20",
            "price--20",
            "sort-price_asc",
            "in-stock",
            "akcii",
            "ucinka",
        ] {
            assert_eq!(
                classify(segment, &registry),
                SegmentClass::Filter,
                "Should be a filter: {}",
                segment
            );
        }
    }

    #[test]
    fn test_reserved_tokens_are_exact() {
        let registry = registry();
        // Bare words without the delimiter are ordinary categories
        assert_eq!(classify("brand", &registry), SegmentClass::Category);
        assert_eq!(classify("sorting", &registry), SegmentClass::Category);
        assert_eq!(classify("in-stock-items", &registry), SegmentClass::Category);
        assert_eq!(classify("akcii2", &registry), SegmentClass::Category);
    }

    #[test]
    fn test_attribute_prefix() {
        let registry = registry();
        assert_eq!(classify("color-black", &registry), SegmentClass::Filter);
        assert_eq!(classify("size-", &registry), SegmentClass::Filter);
        // No hyphen, so never an attribute segment
        assert_eq!(classify("color", &registry), SegmentClass::Category);
        // Only the text before the first hyphen is looked up
        assert_eq!(classify("colors-black", &registry), SegmentClass::Category);
    }

    #[test]
    fn test_category_slug_colliding_with_attribute() {
        // A category named like an attribute-prefixed segment is read as a filter
        let registry = registry();
        assert_eq!(classify("size-guide", &registry), SegmentClass::Filter);
        assert_eq!(classify("size-guide", &FacetRegistry::new()), SegmentClass::Category);
    }

    #[test]
    fn test_attribute_prefix_split() {
        let registry = registry();
        assert_eq!(attribute_prefix("color-black-white", &registry), Some(("color", "black-white")));
        assert_eq!(attribute_prefix("weight-1kg", &registry), None);
        assert_eq!(attribute_prefix("color", &registry), None);
    }
}

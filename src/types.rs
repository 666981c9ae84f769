//! Core data structures for facet path parsing and serialization.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::classifier::{
    BRAND_PREFIX, CLEARANCE_TOKEN, DISCOUNT_TOKEN, IN_STOCK_TOKEN, PRICE_PREFIX, SORT_PREFIX,
};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Decoded, structured representation of all active facets.
///
/// Every field is absent by default. Multi-value fields keep the order they
/// were decoded in; [`FilterState::canonicalize`] sorts them, and the path
/// serializer always emits them sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Selected brand slugs (empty means no brand filter)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand_slugs: Vec<String>,
    /// Attribute slug to selected value slugs
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_filters: BTreeMap<String, Vec<String>>,
    /// Lower price bound (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<u64>,
    /// Upper price bound (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<u64>,
    /// Only products in stock
    #[serde(default, skip_serializing_if = "is_false")]
    pub in_stock: bool,
    /// Only discounted products
    #[serde(default, skip_serializing_if = "is_false")]
    pub has_discount: bool,
    /// Only clearance products
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_clearance: bool,
    /// Opaque sort-order token owned by the catalog query service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl FilterState {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if at least one filter is set.
    pub fn has_active_filters(&self) -> bool {
        crate::core::update::has_active_filters(self)
    }

    /// Sort and deduplicate every multi-value field, dropping attributes
    /// without values.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpath::FilterState;
    ///
    /// let state = FilterState {
    ///     brand_slugs: vec!["samsung".into(), "apple".into(), "apple".into()],
    ///     ..FilterState::default()
    /// };
    /// assert_eq!(state.canonicalize().brand_slugs, vec!["apple", "samsung"]);
    /// ```
    pub fn canonicalize(&self) -> FilterState {
        let attribute_filters = self
            .attribute_filters
            .iter()
            .map(|(slug, values)| (slug.clone(), sorted_unique(values)))
            .filter(|(_, values)| !values.is_empty())
            .collect();

        FilterState {
            brand_slugs: sorted_unique(&self.brand_slugs),
            attribute_filters,
            price_min: self.price_min,
            price_max: self.price_max,
            in_stock: self.in_stock,
            has_discount: self.has_discount,
            is_clearance: self.is_clearance,
            sort_by: self.sort_by.clone().filter(|token| !token.is_empty()),
        }
    }

    /// Check if two states select the same content, ignoring the order of
    /// multi-value fields.
    pub fn is_equivalent(&self, other: &FilterState) -> bool {
        self.canonicalize() == other.canonicalize()
    }

    /// Add a brand if it is not selected, remove it otherwise.
    pub fn toggle_brand(&mut self, slug: &str) {
        if let Some(pos) = self.brand_slugs.iter().position(|s| s == slug) {
            self.brand_slugs.remove(pos);
        } else {
            self.brand_slugs.push(slug.to_string());
        }
    }

    /// Add an attribute value if it is not selected, remove it otherwise.
    ///
    /// Removing the last value of an attribute drops the attribute entirely.
    pub fn toggle_attribute_value(&mut self, attribute: &str, value: &str) {
        let values = self
            .attribute_filters
            .entry(attribute.to_string())
            .or_default();

        if let Some(pos) = values.iter().position(|v| v == value) {
            values.remove(pos);
        } else {
            values.push(value.to_string());
        }

        if values.is_empty() {
            self.attribute_filters.remove(attribute);
        }
    }

    /// Reset every field to absent.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Number of individual facet selections.
    ///
    /// Each brand and each attribute value counts once, a price range counts
    /// once regardless of how many bounds it has, and each flag counts once.
    /// The sort order is not a filter and is not counted.
    pub fn active_filter_count(&self) -> usize {
        let canonical = self.canonicalize();
        let price = usize::from(canonical.price_min.is_some() || canonical.price_max.is_some());
        let flags = [canonical.in_stock, canonical.has_discount, canonical.is_clearance]
            .iter()
            .filter(|flag| **flag)
            .count();

        canonical.brand_slugs.len()
            + canonical
                .attribute_filters
                .values()
                .map(Vec::len)
                .sum::<usize>()
            + price
            + flags
    }
}

fn sorted_unique(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Partial update applied with [`crate::update_filters`].
///
/// `None` leaves a field untouched. `Some` replaces it; an empty collection,
/// a zero price, `false` or an empty sort token clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    /// Replacement brand selection
    pub brand_slugs: Option<Vec<String>>,
    /// Replacement attribute selection
    pub attribute_filters: Option<BTreeMap<String, Vec<String>>>,
    /// Replacement lower price bound
    pub price_min: Option<u64>,
    /// Replacement upper price bound
    pub price_max: Option<u64>,
    /// Replacement in-stock flag
    pub in_stock: Option<bool>,
    /// Replacement discount flag
    pub has_discount: Option<bool>,
    /// Replacement clearance flag
    pub is_clearance: Option<bool>,
    /// Replacement sort token
    pub sort_by: Option<String>,
}

/// Set of attribute slugs that currently have at least one value.
///
/// The registry is the only input used to tell an attribute filter segment
/// apart from a category segment. Attribute slugs and category slugs share
/// one lexical space, so whoever maintains the registry must keep them
/// disjoint: a category slug of the form `<attribute>-<anything>` is always
/// read as a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetRegistry {
    slugs: BTreeSet<String>,
}

impl FacetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from attribute slugs.
    pub fn from_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if the slug is a registered attribute.
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Number of registered attributes.
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Check if no attribute is registered.
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Iterate over registered slugs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FacetRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_slugs(iter)
    }
}

/// Root-to-leaf sequence of category slugs.
///
/// The codec treats the path as an opaque prefix and never checks that the
/// slugs name real categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryPath(Vec<String>);

impl CategoryPath {
    /// Create an empty category path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a category path from slugs, root first.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Slugs, root first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The most specific category, if any.
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Append a descendant slug.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Number of slugs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the path is the catalog root.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CategoryPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for CategoryPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

/// Result of parsing a segment list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPath {
    /// Leading category prefix
    pub category_path: CategoryPath,
    /// Filters decoded from the trailing segments
    pub filters: FilterState,
}

/// Classification of a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentClass {
    /// Part of the category path
    Category,
    /// Starts (or continues) the filter run
    Filter,
}

impl SegmentClass {
    /// Check if the segment is a filter segment.
    pub fn is_filter(self) -> bool {
        self == SegmentClass::Filter
    }
}

/// One decoded filter segment.
///
/// `Display` renders the segment exactly as it appears in a path, without
/// reordering values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSegment {
    /// `brand-<a>-<b>-...`
    Brand(Vec<String>),
    /// `<slug>-<v1>-<v2>-...`
    Attribute {
        /// Registered attribute slug
        slug: String,
        /// Selected value slugs
        values: Vec<String>,
    },
    /// `price-<min>-<max>`, either side may be empty
    Price {
        /// Lower bound
        min: Option<u64>,
        /// Upper bound
        max: Option<u64>,
    },
    /// `in-stock`
    InStock,
    /// `akcii`
    Discount,
    /// `ucinka`
    Clearance,
    /// `sort-<token>`
    Sort(String),
}

impl fmt::Display for FilterSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterSegment::Brand(slugs) => write!(f, "{}{}", BRAND_PREFIX, slugs.join("-")),
            FilterSegment::Attribute { slug, values } => {
                write!(f, "{}-{}", slug, values.join("-"))
            }
            FilterSegment::Price { min, max } => {
                let min = min.map(|v| v.to_string()).unwrap_or_default();
                let max = max.map(|v| v.to_string()).unwrap_or_default();
                write!(f, "{}{}-{}", PRICE_PREFIX, min, max)
            }
            FilterSegment::InStock => f.write_str(IN_STOCK_TOKEN),
            FilterSegment::Discount => f.write_str(DISCOUNT_TOKEN),
            FilterSegment::Clearance => f.write_str(CLEARANCE_TOKEN),
            FilterSegment::Sort(token) => write!(f, "{}{}", SORT_PREFIX, token),
        }
    }
}

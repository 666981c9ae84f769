//! facetpath - canonical slug-based faceted-navigation URLs
//!
//! This crate maps between a catalog URL path and the structured state it
//! encodes: a root-to-leaf category path followed by a run of filter
//! segments (brands, attribute values, price range, stock/discount/clearance
//! flags and sort order).
//!
//! # Features
//!
//! - **Canonical**: filter states that select the same content serialize to
//!   byte-identical paths
//! - **Permissive**: unknown or malformed filter segments are dropped, never
//!   rejected, so stale links keep working
//! - **Pure**: parsing and serialization take the facet registry as an
//!   explicit argument and perform no I/O
//!
//! # Quick Start
//!
//! ```
//! use facetpath::{parse_segments, serialize_path, to_api_params, FacetRegistry};
//!
//! let registry = FacetRegistry::from_slugs(["color"]);
//! let parsed = parse_segments(
//!     &["phones", "brand-samsung-apple", "color-black-white", "price-1000-5000", "in-stock", "sort-price_asc"],
//!     &registry,
//! );
//!
//! assert_eq!(parsed.category_path.segments(), ["phones"]);
//! assert_eq!(parsed.filters.price_min, Some(1000));
//!
//! // Re-emit in canonical order
//! let path = serialize_path("/catalog", &parsed.category_path, &parsed.filters);
//! assert_eq!(
//!     path,
//!     "/catalog/phones/brand-apple-samsung/color-black-white/price-1000-5000/in-stock/sort-price_asc"
//! );
//!
//! // Parameters for the catalog query service
//! let params = to_api_params(parsed.category_path.leaf(), &parsed.filters, 1, 24);
//! assert_eq!(params["brand_slugs"], "apple,samsung");
//! assert_eq!(params["attr_slugs[color]"], "black,white");
//! ```
//!
//! # Path Format
//!
//! | Segment               | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `<category>`          | category slug, only before the first filter |
//! | `brand-<a>-<b>`       | brands                                    |
//! | `<attr>-<v1>-<v2>`    | attribute values, `<attr>` must be registered |
//! | `price-<min>-<max>`   | price range, either bound may be empty    |
//! | `in-stock`            | only products in stock                    |
//! | `akcii`               | only discounted products                  |
//! | `ucinka`              | only clearance products                   |
//! | `sort-<token>`        | sort order                                |
//!
//! Canonical order is the order of this table (attributes ascending by
//! slug), with every multi-value list sorted ascending.
//!
//! # Slug constraints
//!
//! Category slugs must not look like `<registered attribute>-...`: such a
//! segment is always read as an attribute filter. Brand and value slugs must
//! not contain `-`, which separates values.
//!
//! # Error Handling
//!
//! The codec functions are total. Functions at the URL, configuration and
//! query-parameter boundary return `Result<T, FacetPathError>`.

// Re-export main codec functions
pub use self::core::{classify, decode_filter_segment, parse_segments, FacetCodec};
pub use self::core::{canonical_segments, serialize_path, serialize_segments};
pub use self::core::{from_api_params, to_api_params, to_query_string, ApiQuery};
pub use self::core::{cache_key, has_active_filters, update_filters};

// Re-export URL helpers
pub use self::url::{join_route, normalize_route_prefix, page_from_query, path_segments, url_path_segments};

// Re-export public types
pub use config::CodecConfig;
pub use error::FacetPathError;
pub use types::{
    CategoryPath, FacetRegistry, FilterSegment, FilterState, FilterUpdate, ParsedPath, SegmentClass,
};

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod url;

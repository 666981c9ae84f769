//! Codec facade bundling configuration with a facet registry snapshot.

use tracing::debug;

use crate::config::CodecConfig;
use crate::core::decoder::parse_segments;
use crate::core::encoder::serialize_path;
use crate::core::hasher::cache_key;
use crate::core::params::ApiQuery;
use crate::core::update::update_filters;
use crate::error::FacetPathError;
use crate::types::{CategoryPath, FacetRegistry, FilterState, FilterUpdate, ParsedPath};
use crate::url::utils::{path_segments, url_path_segments};

/// Facet path codec for one route and one registry snapshot.
///
/// The registry is fixed for the lifetime of the codec. When the set of
/// attributes changes, build a new codec; links generated against the old
/// registry still parse, with unknown attribute segments dropped.
///
/// # Examples
///
/// ```
/// use facetpath::{CodecConfig, FacetCodec, FacetRegistry, FilterUpdate};
///
/// let codec = FacetCodec::new(CodecConfig::default(), FacetRegistry::from_slugs(["color"]))?;
///
/// let parsed = codec.parse_path("/catalog/phones/in-stock/color-white-black")?;
/// assert_eq!(parsed.category_path.segments(), ["phones"]);
///
/// let next = codec.navigate(&parsed, FilterUpdate { in_stock: Some(false), ..FilterUpdate::default() });
/// assert_eq!(next, "/catalog/phones/color-black-white");
/// # Ok::<(), facetpath::FacetPathError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FacetCodec {
    config: CodecConfig,
    registry: FacetRegistry,
}

impl FacetCodec {
    /// Create a codec, validating the configuration.
    pub fn new(config: CodecConfig, registry: FacetRegistry) -> Result<Self, FacetPathError> {
        let config = config.validated()?;
        debug!(
            route_prefix = %config.route_prefix,
            facets = registry.len(),
            "facet codec ready"
        );
        Ok(Self { config, registry })
    }

    /// Create a codec with the default configuration.
    pub fn with_registry(registry: FacetRegistry) -> Self {
        Self {
            config: CodecConfig::default(),
            registry,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Registry snapshot used for classification.
    pub fn registry(&self) -> &FacetRegistry {
        &self.registry
    }

    /// Parse already-split, already-decoded segments.
    pub fn parse_segments<S: AsRef<str>>(&self, segments: &[S]) -> ParsedPath {
        parse_segments(segments, &self.registry)
    }

    /// Parse a request path under the configured route prefix.
    pub fn parse_path(&self, path: &str) -> Result<ParsedPath, FacetPathError> {
        let segments = path_segments(path, &self.config.route_prefix)?;
        Ok(self.parse_segments(&segments))
    }

    /// Parse a full URL under the configured route prefix.
    pub fn parse_url(&self, url: &str) -> Result<ParsedPath, FacetPathError> {
        let segments = url_path_segments(url, &self.config.route_prefix)?;
        Ok(self.parse_segments(&segments))
    }

    /// Canonical path for a category path and filters.
    pub fn canonical_path(&self, category_path: &CategoryPath, filters: &FilterState) -> String {
        serialize_path(&self.config.route_prefix, category_path, filters)
    }

    /// Rewrite a request path into its canonical form.
    ///
    /// Callers can compare the result with the incoming path to decide on a
    /// permanent redirect.
    pub fn canonicalize_path(&self, path: &str) -> Result<String, FacetPathError> {
        let parsed = self.parse_path(path)?;
        Ok(self.canonical_path(&parsed.category_path, &parsed.filters))
    }

    /// Apply a filter update and return the canonical navigation target.
    pub fn navigate(&self, current: &ParsedPath, update: FilterUpdate) -> String {
        let filters = update_filters(&current.filters, update);
        self.canonical_path(&current.category_path, &filters)
    }

    /// Build the catalog query for a parsed path.
    ///
    /// The category sent to the catalog query service is the leaf of the
    /// category path. The page is at least 1 and the limit is clamped by the
    /// configuration.
    pub fn api_query(&self, parsed: &ParsedPath, page: u32, limit: Option<u32>) -> ApiQuery {
        ApiQuery::new(
            parsed.category_path.leaf().map(str::to_string),
            parsed.filters.canonicalize(),
            page.max(1),
            self.config.clamp_limit(limit),
        )
    }

    /// Cache key for a parsed path.
    pub fn cache_key(&self, parsed: &ParsedPath) -> String {
        cache_key(&parsed.category_path, &parsed.filters)
    }
}

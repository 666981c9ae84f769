//! Codec configuration.
//!
//! Values come from defaults, environment variables or a TOML document:
//!
//! | Variable                  | Default    |
//! |---------------------------|------------|
//! | `FACETPATH_ROUTE_PREFIX`  | `/catalog` |
//! | `FACETPATH_DEFAULT_LIMIT` | `24`       |
//! | `FACETPATH_MAX_LIMIT`     | `100`      |

use serde::{Deserialize, Serialize};

use crate::error::FacetPathError;
use crate::url::utils::normalize_route_prefix;

pub const ENV_ROUTE_PREFIX: &str = "FACETPATH_ROUTE_PREFIX";
pub const ENV_DEFAULT_LIMIT: &str = "FACETPATH_DEFAULT_LIMIT";
pub const ENV_MAX_LIMIT: &str = "FACETPATH_MAX_LIMIT";

pub const DEFAULT_ROUTE_PREFIX: &str = "/catalog";
pub const DEFAULT_PAGE_LIMIT: u32 = 24;
pub const DEFAULT_MAX_LIMIT: u32 = 100;

#[must_use]
fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
fn read_env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
}

/// Settings shared by every parse and serialize call of a [`crate::FacetCodec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Route the catalog is mounted under; canonical paths start with it
    pub route_prefix: String,
    /// Page size used when a caller does not ask for one
    pub default_limit: u32,
    /// Largest page size forwarded to the catalog query service
    pub max_limit: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl CodecConfig {
    /// Load from `FACETPATH_*` environment variables.
    ///
    /// Blank or unparsable values fall back to the defaults.
    pub fn from_env() -> Result<Self, FacetPathError> {
        let defaults = Self::default();
        Self {
            route_prefix: read_non_empty_env(ENV_ROUTE_PREFIX).unwrap_or(defaults.route_prefix),
            default_limit: read_env_u32(ENV_DEFAULT_LIMIT).unwrap_or(defaults.default_limit),
            max_limit: read_env_u32(ENV_MAX_LIMIT).unwrap_or(defaults.max_limit),
        }
        .validated()
    }

    /// Load from a TOML document. Missing keys take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpath::CodecConfig;
    ///
    /// let config = CodecConfig::from_toml_str("route_prefix = \"/shop/\"\nmax_limit = 60")?;
    /// assert_eq!(config.route_prefix, "/shop");
    /// assert_eq!(config.default_limit, 24);
    /// assert_eq!(config.max_limit, 60);
    /// # Ok::<(), facetpath::FacetPathError>(())
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self, FacetPathError> {
        let config: CodecConfig = toml::from_str(raw)?;
        config.validated()
    }

    /// Normalize the route prefix and check the limits.
    ///
    /// An empty prefix mounts the catalog at the site root.
    pub fn validated(mut self) -> Result<Self, FacetPathError> {
        let raw_prefix = self.route_prefix.trim();
        if !raw_prefix.is_empty() && !raw_prefix.starts_with('/') {
            return Err(FacetPathError::InvalidConfig(format!(
                "route_prefix must start with '/': {:?}",
                self.route_prefix
            )));
        }
        self.route_prefix = normalize_route_prefix(raw_prefix);

        if self.default_limit == 0 {
            return Err(FacetPathError::InvalidConfig(
                "default_limit must be at least 1".to_string(),
            ));
        }
        if self.max_limit < self.default_limit {
            return Err(FacetPathError::InvalidConfig(format!(
                "max_limit ({}) must not be below default_limit ({})",
                self.max_limit, self.default_limit
            )));
        }

        Ok(self)
    }

    /// Resolve a requested page size.
    ///
    /// `None` and `0` map to the default; larger requests are capped.
    pub fn clamp_limit(&self, requested: Option<u32>) -> u32 {
        match requested {
            None | Some(0) => self.default_limit,
            Some(limit) => limit.min(self.max_limit),
        }
    }
}

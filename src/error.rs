//! Error types for the boundary operations of the facet path codec.
//!
//! The codec itself (classification, parsing, serialization, state updates)
//! is total and never fails. Errors only arise where structured input crosses
//! into the crate: full URLs, route prefixes, configuration and query
//! parameter maps.

use thiserror::Error;

/// Errors that can occur at the URL, configuration or query-parameter boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacetPathError {
    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParse(String),

    /// The path does not live under the configured route prefix.
    #[error("Path {path:?} is not under route prefix {prefix:?}")]
    RoutePrefixMismatch {
        /// Route prefix the codec was configured with
        prefix: String,
        /// Path that was handed to the codec
        path: String,
    },

    /// The codec configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be deserialized.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    /// A query parameter that must always be present is missing.
    #[error("Missing required parameter: {0}")]
    MissingParam(String),

    /// A query parameter carries a value that cannot be interpreted.
    #[error("Invalid value {value:?} for parameter {key}")]
    InvalidParam {
        /// Parameter name
        key: String,
        /// Raw parameter value
        value: String,
    },
}

impl From<url::ParseError> for FacetPathError {
    fn from(err: url::ParseError) -> Self {
        FacetPathError::UrlParse(err.to_string())
    }
}

impl From<toml::de::Error> for FacetPathError {
    fn from(err: toml::de::Error) -> Self {
        FacetPathError::ConfigParse(err.to_string())
    }
}

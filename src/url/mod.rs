//! URL and route handling around the codec.
//!
//! This module contains the boundary helpers:
//! - Route prefix normalization
//! - Path and URL splitting into decoded segments
//! - Joining canonical segments under a route prefix
//! - Pagination query lookup

pub mod utils;

// Re-export main functionality
pub use utils::{
    join_route, normalize_route_prefix, page_from_query, path_segments, url_path_segments,
};

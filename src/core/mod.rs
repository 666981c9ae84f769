//! Core facet path codec.
//!
//! This module contains the codec operations:
//! - Classifying path segments as category or filter
//! - Decoding segment lists into filter state
//! - Canonical path serialization
//! - Query parameters for the catalog query service
//! - Filter state updates
//! - Cache keys over canonical paths

pub mod classifier;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod hasher;
pub mod params;
pub mod update;

// Re-export main functionality
pub use classifier::{classify, is_reserved};
pub use codec::FacetCodec;
pub use decoder::{apply_segment, decode_filter_segment, parse_segments};
pub use encoder::{canonical_segments, serialize_path, serialize_segments};
pub use hasher::{cache_key, hash_labeled};
pub use params::{attribute_param_key, from_api_params, to_api_params, to_query_string, ApiQuery};
pub use update::{has_active_filters, update_filters};

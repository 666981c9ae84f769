//! Cache keys derived from canonical paths using labeled SHA-256.

use sha2::{Digest, Sha256};

use crate::core::encoder::serialize_segments;
use crate::types::{CategoryPath, FilterState};

/// Label mixed into every cache key hash.
pub const CACHE_KEY_LABEL: &str = "facetpath";

/// Hash data under a label: `SHA256(label || 0x00 || data)`.
pub fn hash_labeled(label: &str, data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(label.as_bytes());
    hasher.update([0x00u8]);
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Derive a stable cache key for a category path and filter state.
///
/// The key is the lowercase hex SHA-256 of the canonical segment list, so it
/// does not depend on the route prefix or on the order multi-value fields
/// were selected in.
///
/// # Examples
///
/// ```
/// use facetpath::{cache_key, CategoryPath, FilterState};
///
/// let path = CategoryPath::from_segments(["phones"]);
/// let a = FilterState { brand_slugs: vec!["lg".into(), "apple".into()], ..FilterState::default() };
/// let b = FilterState { brand_slugs: vec!["apple".into(), "lg".into()], ..FilterState::default() };
///
/// assert_eq!(cache_key(&path, &a), cache_key(&path, &b));
/// assert_eq!(cache_key(&path, &a).len(), 64);
/// ```
pub fn cache_key(category_path: &CategoryPath, filters: &FilterState) -> String {
    let canonical = serialize_segments(category_path, filters).join("/");
    hex::encode(hash_labeled(CACHE_KEY_LABEL, canonical.as_bytes()))
}

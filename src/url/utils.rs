//! Route-level path helpers.
//!
//! These functions sit between raw request paths or URLs and the segment
//! lists the codec works on: stripping the route prefix, splitting and
//! percent-decoding segments, and joining canonical segments back under the
//! prefix.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::FacetPathError;

/// Characters escaped when a segment is written into a path.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Normalize a route prefix: ensure a leading slash and drop trailing ones.
///
/// The catalog root prefix normalizes to the empty string.
///
/// # Examples
///
/// ```
/// use facetpath::normalize_route_prefix;
///
/// assert_eq!(normalize_route_prefix("/catalog/"), "/catalog");
/// assert_eq!(normalize_route_prefix("shop"), "/shop");
/// assert_eq!(normalize_route_prefix("/"), "");
/// ```
pub fn normalize_route_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Split a request path under a route prefix into decoded segments.
///
/// Any query string or fragment is ignored, empty segments are removed and
/// each segment is percent-decoded.
///
/// # Examples
///
/// ```
/// use facetpath::path_segments;
///
/// let segments = path_segments("/catalog/phones/brand-apple?page=2", "/catalog")?;
/// assert_eq!(segments, vec!["phones", "brand-apple"]);
///
/// assert!(path_segments("/blog/phones", "/catalog").is_err());
/// # Ok::<(), facetpath::FacetPathError>(())
/// ```
pub fn path_segments(path: &str, route_prefix: &str) -> Result<Vec<String>, FacetPathError> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let prefix = normalize_route_prefix(route_prefix);
    let rest = match path.strip_prefix(prefix.as_str()) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => {
            return Err(FacetPathError::RoutePrefixMismatch {
                prefix: prefix.clone(),
                path: path.clone(),
            })
        }
    };

    Ok(rest
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
        .collect())
}

/// Parse a full URL and split its path under a route prefix.
///
/// # Examples
///
/// ```
/// use facetpath::url_path_segments;
///
/// let segments = url_path_segments("https://shop.example.com/catalog/tv/akcii#top", "/catalog")?;
/// assert_eq!(segments, vec!["tv", "akcii"]);
/// # Ok::<(), facetpath::FacetPathError>(())
/// ```
pub fn url_path_segments(url: &str, route_prefix: &str) -> Result<Vec<String>, FacetPathError> {
    let parsed = Url::parse(url)?;
    path_segments(parsed.path(), route_prefix)
}

/// Join segments under a route prefix.
///
/// An empty segment list yields the bare route root.
///
/// # Examples
///
/// ```
/// use facetpath::join_route;
///
/// assert_eq!(join_route("/catalog", &["phones", "in-stock"]), "/catalog/phones/in-stock");
/// assert_eq!(join_route("/catalog/", &[] as &[&str]), "/catalog");
/// assert_eq!(join_route("/", &[] as &[&str]), "/");
/// ```
pub fn join_route<S: AsRef<str>>(route_prefix: &str, segments: &[S]) -> String {
    let mut path = normalize_route_prefix(route_prefix);
    for segment in segments {
        path.push('/');
        path.extend(utf8_percent_encode(segment.as_ref(), PATH_SEGMENT));
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Read the `page` query parameter of a URL.
///
/// Missing, non-numeric and zero values yield `None`.
///
/// # Examples
///
/// ```
/// use facetpath::page_from_query;
///
/// assert_eq!(page_from_query("https://example.com/catalog/tv?page=3")?, Some(3));
/// assert_eq!(page_from_query("https://example.com/catalog/tv?page=zero")?, None);
/// assert_eq!(page_from_query("https://example.com/catalog/tv")?, None);
/// # Ok::<(), facetpath::FacetPathError>(())
/// ```
pub fn page_from_query(url: &str) -> Result<Option<u32>, FacetPathError> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route_prefix() {
        assert_eq!(normalize_route_prefix("/catalog"), "/catalog");
        assert_eq!(normalize_route_prefix("/catalog//"), "/catalog");
        assert_eq!(normalize_route_prefix(" /shop/items "), "/shop/items");
        assert_eq!(normalize_route_prefix(""), "");
    }

    #[test]
    fn test_path_segments_basic() {
        let segments = path_segments("/catalog/phones/brand-apple", "/catalog").unwrap();
        assert_eq!(segments, vec!["phones", "brand-apple"]);
    }

    #[test]
    fn test_path_segments_root() {
        assert!(path_segments("/catalog", "/catalog").unwrap().is_empty());
        assert!(path_segments("/catalog/", "/catalog").unwrap().is_empty());
        assert_eq!(path_segments("/tv/akcii", "/").unwrap(), vec!["tv", "akcii"]);
    }

    #[test]
    fn test_path_segments_prefix_boundary() {
        // "/catalogue" shares characters with "/catalog" but is another route
        let err = path_segments("/catalogue/phones", "/catalog").unwrap_err();
        assert_eq!(
            err,
            FacetPathError::RoutePrefixMismatch {
                prefix: "/catalog".to_string(),
                path: "/catalogue/phones".to_string(),
            }
        );
    }

    #[test]
    fn test_path_segments_decoding() {
        let segments = path_segments("/catalog//phones/caf%C3%A9/", "/catalog").unwrap();
        assert_eq!(segments, vec!["phones", "café"]);
    }

    #[test]
    fn test_path_segments_without_leading_slash() {
        let segments = path_segments("catalog/tv", "/catalog").unwrap();
        assert_eq!(segments, vec!["tv"]);
    }

    #[test]
    fn test_join_route_encodes_segments() {
        assert_eq!(join_route("/catalog", &["café", "a b"]), "/catalog/caf%C3%A9/a%20b");
    }

    #[test]
    fn test_join_then_split() {
        let segments = vec!["phones".to_string(), "sort-price_asc".to_string(), "ünï".to_string()];
        let path = join_route("/catalog", &segments);
        assert_eq!(path_segments(&path, "/catalog").unwrap(), segments);
    }

    #[test]
    fn test_url_path_segments_invalid_url() {
        let result = url_path_segments("not a url", "/catalog");
        assert!(matches!(result, Err(FacetPathError::UrlParse(_))));
    }
}

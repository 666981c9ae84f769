//! Query parameters for the catalog query service.
//!
//! Unlike the path form, the parameter map is not persisted, so it only has
//! to be complete and decodable back into the same filter state. Keys:
//!
//! | Key                   | Value                                  |
//! |-----------------------|----------------------------------------|
//! | `category_slug`       | leaf category slug, omitted at root    |
//! | `brand_slugs`         | comma-joined brand slugs               |
//! | `attr_slugs[<slug>]`  | comma-joined value slugs per attribute |
//! | `price_min`/`price_max` | decimal integers                     |
//! | `in_stock`, `has_discount`, `is_clearance` | `"true"`, only when set |
//! | `sort_by`             | sort token                             |
//! | `page`, `limit`       | always present                         |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::form_urlencoded;

use crate::error::FacetPathError;
use crate::types::FilterState;

pub const PARAM_CATEGORY: &str = "category_slug";
pub const PARAM_BRANDS: &str = "brand_slugs";
pub const PARAM_PRICE_MIN: &str = "price_min";
pub const PARAM_PRICE_MAX: &str = "price_max";
pub const PARAM_IN_STOCK: &str = "in_stock";
pub const PARAM_DISCOUNT: &str = "has_discount";
pub const PARAM_CLEARANCE: &str = "is_clearance";
pub const PARAM_SORT: &str = "sort_by";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_LIMIT: &str = "limit";

const ATTR_KEY_OPEN: &str = "attr_slugs[";
const ATTR_KEY_CLOSE: &str = "]";
const TRUE_LITERAL: &str = "true";

/// Parameter key carrying the values of one attribute.
pub fn attribute_param_key(slug: &str) -> String {
    format!("{}{}{}", ATTR_KEY_OPEN, slug, ATTR_KEY_CLOSE)
}

fn attribute_slug_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(ATTR_KEY_OPEN)?
        .strip_suffix(ATTR_KEY_CLOSE)
        .filter(|slug| !slug.is_empty())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, FacetPathError> {
    raw.trim().parse::<T>().map_err(|_| FacetPathError::InvalidParam {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, FacetPathError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FacetPathError::InvalidParam {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Render filters as a flat parameter map for the catalog query service.
///
/// # Examples
///
/// ```
/// use facetpath::{to_api_params, FilterState};
///
/// let filters = FilterState { in_stock: true, price_min: Some(100), ..FilterState::default() };
/// let params = to_api_params(Some("phones"), &filters, 2, 24);
///
/// assert_eq!(params["category_slug"], "phones");
/// assert_eq!(params["in_stock"], "true");
/// assert_eq!(params["price_min"], "100");
/// assert_eq!(params["page"], "2");
/// assert_eq!(params["limit"], "24");
/// assert!(!params.contains_key("has_discount"));
/// ```
pub fn to_api_params(
    category_slug: Option<&str>,
    filters: &FilterState,
    page: u32,
    limit: u32,
) -> BTreeMap<String, String> {
    let filters = filters.canonicalize();
    let mut params = BTreeMap::new();

    if let Some(slug) = category_slug.filter(|slug| !slug.is_empty()) {
        params.insert(PARAM_CATEGORY.to_string(), slug.to_string());
    }

    if !filters.brand_slugs.is_empty() {
        params.insert(PARAM_BRANDS.to_string(), filters.brand_slugs.join(","));
    }

    for (slug, values) in &filters.attribute_filters {
        params.insert(attribute_param_key(slug), values.join(","));
    }

    if let Some(min) = filters.price_min {
        params.insert(PARAM_PRICE_MIN.to_string(), min.to_string());
    }
    if let Some(max) = filters.price_max {
        params.insert(PARAM_PRICE_MAX.to_string(), max.to_string());
    }

    for (key, flag) in [
        (PARAM_IN_STOCK, filters.in_stock),
        (PARAM_DISCOUNT, filters.has_discount),
        (PARAM_CLEARANCE, filters.is_clearance),
    ] {
        if flag {
            params.insert(key.to_string(), TRUE_LITERAL.to_string());
        }
    }

    if let Some(token) = filters.sort_by {
        params.insert(PARAM_SORT.to_string(), token);
    }

    params.insert(PARAM_PAGE.to_string(), page.to_string());
    params.insert(PARAM_LIMIT.to_string(), limit.to_string());

    params
}

/// A paginated product query as sent to the catalog query service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQuery {
    /// Leaf category slug, `None` at the catalog root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// Active filters
    #[serde(default)]
    pub filters: FilterState,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
}

impl ApiQuery {
    /// Create a query.
    pub fn new(category_slug: Option<String>, filters: FilterState, page: u32, limit: u32) -> Self {
        Self {
            category_slug,
            filters,
            page,
            limit,
        }
    }

    /// Render as a flat parameter map.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        to_api_params(self.category_slug.as_deref(), &self.filters, self.page, self.limit)
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    pub fn to_query_string(&self) -> String {
        to_query_string(&self.to_params())
    }
}

/// Decode a parameter map produced by [`to_api_params`].
///
/// `page` and `limit` are required. Unknown keys are ignored. Numeric and
/// boolean values that cannot be read are reported as
/// [`FacetPathError::InvalidParam`].
///
/// # Examples
///
/// ```
/// use facetpath::{from_api_params, to_api_params, FilterState};
///
/// let filters = FilterState { brand_slugs: vec!["apple".into(), "lg".into()], ..FilterState::default() };
/// let params = to_api_params(None, &filters, 1, 20);
///
/// let query = from_api_params(&params)?;
/// assert_eq!(query.category_slug, None);
/// assert_eq!(query.filters, filters);
/// assert_eq!((query.page, query.limit), (1, 20));
/// # Ok::<(), facetpath::FacetPathError>(())
/// ```
pub fn from_api_params<I, K, V>(params: I) -> Result<ApiQuery, FacetPathError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut category_slug = None;
    let mut filters = FilterState::default();
    let mut page = None;
    let mut limit = None;

    for (key, value) in params {
        let (key, value) = (key.as_ref(), value.as_ref());
        match key {
            PARAM_CATEGORY => {
                category_slug = Some(value.to_string()).filter(|slug| !slug.is_empty());
            }
            PARAM_BRANDS => filters.brand_slugs = split_list(value),
            PARAM_PRICE_MIN => filters.price_min = Some(parse_number(key, value)?),
            PARAM_PRICE_MAX => filters.price_max = Some(parse_number(key, value)?),
            PARAM_IN_STOCK => filters.in_stock = parse_flag(key, value)?,
            PARAM_DISCOUNT => filters.has_discount = parse_flag(key, value)?,
            PARAM_CLEARANCE => filters.is_clearance = parse_flag(key, value)?,
            PARAM_SORT => {
                filters.sort_by = Some(value.to_string()).filter(|token| !token.is_empty());
            }
            PARAM_PAGE => page = Some(parse_number::<u32>(key, value)?),
            PARAM_LIMIT => limit = Some(parse_number::<u32>(key, value)?),
            _ => match attribute_slug_from_key(key) {
                Some(slug) => {
                    let values = split_list(value);
                    if !values.is_empty() {
                        filters.attribute_filters.insert(slug.to_string(), values);
                    }
                }
                None => debug!(key, "ignoring unknown query parameter"),
            },
        }
    }

    Ok(ApiQuery {
        category_slug,
        filters,
        page: page.ok_or_else(|| FacetPathError::MissingParam(PARAM_PAGE.to_string()))?,
        limit: limit.ok_or_else(|| FacetPathError::MissingParam(PARAM_LIMIT.to_string()))?,
    })
}

/// Encode a parameter map as an `application/x-www-form-urlencoded` string.
pub fn to_query_string(params: &BTreeMap<String, String>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}
